pub mod app_state_builder;
pub mod stubs;

#[cfg(test)]
pub fn seed_fixture() -> serde_json::Value {
    let raw = include_str!("../../../demos/seed.json");
    serde_json::from_str(raw).expect("demos/seed.json must be valid JSON")
}
