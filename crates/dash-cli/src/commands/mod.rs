pub mod dispatch;
pub mod options;
pub mod seed;
pub mod serve;
pub mod view;
