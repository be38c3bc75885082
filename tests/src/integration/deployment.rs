//! # Deployment & Discovery
//!
//! Wiring correctness: fixed name-registry keys resolve, grants landed, and
//! the record book supersedes per network.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use idlink_runtime::deploy::COMPONENT_NAMES;
    use idlink_runtime::RecordBook;
    use shared_types::encoding::str_to_bytes32;

    #[test]
    fn test_all_components_discoverable() {
        let t = TestNet::deploy();
        for name in COMPONENT_NAMES {
            let key = str_to_bytes32(name).unwrap();
            assert!(
                t.net.registry.get(&key).is_some(),
                "component {name} not registered"
            );
        }
    }

    #[test]
    fn test_manager_holds_capabilities() {
        let t = TestNet::deploy();
        assert!(t.net.store.is_manager(&t.net.addresses.manager));
        assert_eq!(t.net.manager.address(), t.net.addresses.manager);
    }

    #[test]
    fn test_validator_seeded_for_each_app() {
        let t = TestNet::deploy();
        let validator = t.validator();
        for app_id in [APP_TWITTER, APP_REDDIT, APP_INSTAGRAM] {
            assert!(t.net.directory.is_validator_for_group(app_id, &validator));
        }
        assert!(!t.net.directory.is_validator_for_group(6, &validator));
    }

    #[test]
    fn test_record_book_supersedes_per_network() {
        let first = TestNet::deploy();
        let second = TestNet::deploy();

        let mut book = RecordBook::new();
        book.record("testnet", &first.net.addresses.registry, first.now());
        book.record("testnet", &second.net.addresses.registry, second.now() + 100);
        book.record("mainnet", &first.net.addresses.registry, first.now());

        let testnet = book.current("testnet").unwrap();
        assert_eq!(testnet.previous_versions.len(), 1);
        assert!(book.current("mainnet").unwrap().previous_versions.is_empty());
    }
}
