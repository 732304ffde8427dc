pub mod alert;

pub use alert::AlertSink;
