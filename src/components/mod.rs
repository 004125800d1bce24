pub mod device_alert;
pub mod template;
