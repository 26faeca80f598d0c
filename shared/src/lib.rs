/// CreatorHub Shared Library
///
/// Domain logic for the CreatorHub demo suite: the tool catalog, the URL
/// site detector, the consent state machine and its gate, per-panel form
/// state, attachment validation, and the SQLite preference store. Nothing
/// in here touches Telegram types, so every piece is testable on its own.
pub mod config;
pub mod consent;
pub mod db;
pub mod errors;
pub mod files;
pub mod forms;
pub mod gate;
pub mod modal;
pub mod models;
pub mod site;
pub mod tools;
