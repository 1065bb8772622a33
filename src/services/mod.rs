pub mod booking;
pub mod commands;
pub mod courts;
pub mod datetime;
pub mod messaging;
pub mod poller;
pub mod report;
pub mod router;
pub mod selector;
