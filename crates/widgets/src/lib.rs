pub mod balances;
pub mod chart;
pub mod clock;
pub mod header;
pub mod panel;
pub mod pay;
pub mod status;
pub mod swap;

pub use balances::BalancesWidget;
pub use chart::ChartWidget;
pub use clock::ClockWidget;
pub use header::HeaderWidget;
pub use pay::PayWidget;
pub use status::StatusWidget;
pub use swap::SwapWidget;
