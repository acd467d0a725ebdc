pub mod view;
pub mod vis2d;
