mod activity;
mod chart;
mod resources;
mod stats;
mod view;

pub use view::Dashboard;
