pub mod copy_decode;
pub mod copy_result;
pub mod event_form;
pub mod prize;
pub mod session;
