pub mod persistence;

use uuid::Uuid;

/// Fresh id for a collection entry. UUID-backed so that ids minted after a
/// restart can never collide with ids hydrated from disk, and rapid
/// successive adds never share an id.
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn ids_carry_prefix_and_differ() {
        let a = generate_id("expenses");
        let b = generate_id("expenses");
        assert!(a.starts_with("expenses-"));
        assert_ne!(a, b);
    }
}
