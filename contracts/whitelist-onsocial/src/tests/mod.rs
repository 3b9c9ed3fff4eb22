
// --- Unit Tests ---
pub mod unit {
    pub mod admin_mode_test;
    pub mod admin_test;
    pub mod caps_test;
    pub mod errors_test;
    pub mod events_test;
    pub mod guards_test;
    pub mod scenario_test;
    pub mod seal_test;
    pub mod storage_test;
    pub mod validation_test;
    pub mod views_test;
    pub mod whitelist_test;
}
