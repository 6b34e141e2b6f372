pub mod session_modal;
