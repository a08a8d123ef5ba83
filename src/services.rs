pub mod stepper;
pub use stepper::SelectionStepper;
pub mod warehouse_service;
pub use warehouse_service::WarehouseService;
