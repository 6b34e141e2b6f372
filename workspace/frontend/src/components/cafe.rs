pub mod order_modal;
