use crate::utils::{to_instance_name, to_package_name, to_snake_case, to_type_name};

/// Casing variants derived from the last segment of an identifier.
///
/// Every field is computed from the same segment in [`TokenSet::new`] and there
/// are no setters, so the variants cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    package_name: String,
    type_name: String,
    instance_name: String,
    file_base_name: String,
}

impl TokenSet {
    /// Derive all variants from a non-empty segment (e.g. "orderItem").
    pub fn new(segment: &str) -> Self {
        debug_assert!(!segment.is_empty(), "segment must not be empty");
        Self {
            package_name: to_package_name(segment),
            type_name: to_type_name(segment),
            instance_name: to_instance_name(segment),
            file_base_name: to_snake_case(segment),
        }
    }

    /// Lower-cased segment, e.g. "orderitem".
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Exported type name, e.g. "OrderItem".
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Unexported instance name, e.g. "orderItem".
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// snake_case file stem, e.g. "order_item".
    pub fn file_base_name(&self) -> &str {
        &self.file_base_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_segment() {
        let tokens = TokenSet::new("order");
        assert_eq!(tokens.package_name(), "order");
        assert_eq!(tokens.type_name(), "Order");
        assert_eq!(tokens.instance_name(), "order");
        assert_eq!(tokens.file_base_name(), "order");
    }

    #[test]
    fn test_camel_case_segment() {
        let tokens = TokenSet::new("orderItem");
        assert_eq!(tokens.package_name(), "orderitem");
        assert_eq!(tokens.type_name(), "OrderItem");
        assert_eq!(tokens.instance_name(), "orderItem");
        assert_eq!(tokens.file_base_name(), "order_item");
    }

    #[test]
    fn test_variants_agree_when_lowercased() {
        for segment in ["order", "OrderItem", "userProfile", "x"] {
            let tokens = TokenSet::new(segment);
            assert_eq!(tokens.type_name().to_lowercase(), tokens.package_name());
            assert_eq!(tokens.instance_name().to_lowercase(), tokens.package_name());
        }
    }
}
