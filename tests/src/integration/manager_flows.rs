//! # Bind / Update Flows
//!
//! End-to-end identity creation and self-authorized transfer against a
//! deployed stack with real validator signatures.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use il_02_binding_store::StoreEvent;
    use il_04_attestation::AttestationError;
    use il_05_identity_manager::{BatchEntry, ErrorKind, IdentityApi, ManagerError};
    use k256::ecdsa::SigningKey;
    use shared_types::{encoding, ExternalId, PRIMARY_APP_ID};

    #[test]
    fn test_set_default_identity_then_duplicate_fails() {
        let t = TestNet::deploy();

        let event = t.net.manager.set_primary_identity(&BOB).unwrap();
        assert_eq!(
            event,
            StoreEvent::BindingCreated {
                app_id: PRIMARY_APP_ID,
                external_id: tid(1),
                owner: BOB
            }
        );

        let error = t.net.manager.set_primary_identity(&BOB).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Uniqueness);
    }

    #[test]
    fn test_set_twitter_identity() {
        let t = TestNet::deploy();
        let id = tid(637_800_044);
        let signature = t.sign(BOB, APP_TWITTER, id, t.now());

        let event = t
            .net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap();
        assert_eq!(
            event,
            StoreEvent::BindingCreated {
                app_id: APP_TWITTER,
                external_id: id,
                owner: BOB
            }
        );

        assert_eq!(t.net.store.owner_by_id(APP_TWITTER, id), Some(BOB));
        assert_eq!(t.net.store.id_by_owner(APP_TWITTER, &BOB), Some(id));
    }

    #[test]
    fn test_set_reddit_identity_from_alphanumeric_handle() {
        let t = TestNet::deploy();
        let id = encoding::external_id_from_alphanumeric("fxP8r3").unwrap();
        let signature = t.sign(BOB, APP_REDDIT, id, t.now());

        let event = t
            .net
            .manager
            .set_identity(&BOB, APP_REDDIT, id, t.now(), Some(signature))
            .unwrap();
        assert_eq!(
            event,
            StoreEvent::BindingCreated {
                app_id: APP_REDDIT,
                external_id: id,
                owner: BOB
            }
        );
    }

    #[test]
    fn test_set_identity_with_huge_decimal_id() {
        let t = TestNet::deploy();
        let id = encoding::external_id_from_decimal("342343543456545676343434343434").unwrap();
        assert!(id > ExternalId::from(u64::MAX));

        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap();
        assert_eq!(t.net.store.owner_by_id(APP_TWITTER, id), Some(BOB));
    }

    #[test]
    fn test_set_multiple_identities_twitter_and_reddit() {
        let t = TestNet::deploy();
        let twitter_id = tid(273_645_362_718_263_746);
        let reddit_id = encoding::external_id_from_alphanumeric("1nihr8b3").unwrap();
        let timestamp = t.now();

        let events = t
            .net
            .manager
            .set_multiple_identities(
                &BOB,
                vec![
                    BatchEntry::signed(
                        APP_TWITTER,
                        twitter_id,
                        t.sign(BOB, APP_TWITTER, twitter_id, timestamp),
                    ),
                    BatchEntry::signed(
                        APP_REDDIT,
                        reddit_id,
                        t.sign(BOB, APP_REDDIT, reddit_id, timestamp),
                    ),
                ],
                timestamp,
            )
            .unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(t.net.store.id_by_owner(APP_TWITTER, &BOB), Some(twitter_id));
        assert_eq!(t.net.store.id_by_owner(APP_REDDIT, &BOB), Some(reddit_id));
    }

    #[test]
    fn test_set_multiple_identities_with_primary_entry() {
        let t = TestNet::deploy();
        let twitter_id = tid(637_800_044);
        let timestamp = t.now();

        let events = t
            .net
            .manager
            .set_multiple_identities(
                &BOB,
                vec![
                    BatchEntry::signed(
                        APP_TWITTER,
                        twitter_id,
                        t.sign(BOB, APP_TWITTER, twitter_id, timestamp),
                    ),
                    BatchEntry::primary(),
                ],
                timestamp,
            )
            .unwrap();

        assert_eq!(
            events[0],
            StoreEvent::BindingCreated {
                app_id: APP_TWITTER,
                external_id: twitter_id,
                owner: BOB
            }
        );
        assert_eq!(
            events[1],
            StoreEvent::BindingCreated {
                app_id: PRIMARY_APP_ID,
                external_id: tid(1),
                owner: BOB
            }
        );
    }

    #[test]
    fn test_batch_is_atomic_across_entries() {
        let t = TestNet::deploy();
        let timestamp = t.now();
        let good_id = tid(100);

        // Second entry signed by a stranger key: whole batch must abort.
        let stranger = SigningKey::random(&mut rand::thread_rng());
        let result = t.net.manager.set_multiple_identities(
            &BOB,
            vec![
                BatchEntry::signed(
                    APP_TWITTER,
                    good_id,
                    t.sign(BOB, APP_TWITTER, good_id, timestamp),
                ),
                BatchEntry::signed(
                    APP_REDDIT,
                    tid(200),
                    t.sign_with(&stranger, BOB, APP_REDDIT, tid(200), timestamp),
                ),
            ],
            timestamp,
        );

        assert_eq!(result.unwrap_err().kind(), ErrorKind::Authorization);
        assert_eq!(t.net.store.id_by_owner(APP_TWITTER, &BOB), None);
        // No binding event leaked from the aborted batch.
        assert!(!t
            .net
            .store
            .events()
            .iter()
            .any(|event| matches!(event, StoreEvent::BindingCreated { .. })));
    }

    #[test]
    fn test_unsupported_app_has_no_validator() {
        let t = TestNet::deploy();
        let id = tid(54_433_433);
        let signature = t.sign(BOB, 6, id, t.now());

        // The validator key is only registered for apps 1-3; app 6
        // rejects it as an invalid signature.
        let error = t
            .net
            .manager
            .set_identity(&BOB, 6, id, t.now(), Some(signature))
            .unwrap_err();
        assert_eq!(
            error,
            ManagerError::Attestation(AttestationError::InvalidSignature { app_id: 6 })
        );
    }

    #[test]
    fn test_already_set_rejections() {
        let t = TestNet::deploy();
        let id = tid(342_343_543_456_545_676);
        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap();

        // Bob again, different id: owner uniqueness.
        let other = tid(87_676);
        let signature = t.sign(BOB, APP_TWITTER, other, t.now());
        let error = t
            .net
            .manager
            .set_identity(&BOB, APP_TWITTER, other, t.now(), Some(signature))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Uniqueness);

        // Alice on Bob's id: external-id uniqueness.
        let signature = t.sign(ALICE, APP_TWITTER, id, t.now());
        let error = t
            .net
            .manager
            .set_identity(&ALICE, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Uniqueness);
    }

    #[test]
    fn test_expired_signature_rejected() {
        let t = TestNet::deploy();
        t.net
            .verifier
            .update_validity_window(&DEPLOYER, Some(APP_TWITTER), 5)
            .unwrap();

        let id = tid(637_800_044);
        let timestamp = t.now() - 100;
        let signature = t.sign(ALICE, APP_TWITTER, id, timestamp);

        let error = t
            .net
            .manager
            .set_identity(&ALICE, APP_TWITTER, id, timestamp, Some(signature))
            .unwrap_err();
        assert!(matches!(
            error,
            ManagerError::Attestation(AttestationError::Expired { .. })
        ));
    }

    #[test]
    fn test_expiry_accepts_exact_boundary() {
        let t = TestNet::deploy();
        t.net
            .verifier
            .update_validity_window(&DEPLOYER, Some(APP_TWITTER), 5)
            .unwrap();

        let id = tid(42);
        let timestamp = t.now();
        let signature = t.sign(BOB, APP_TWITTER, id, timestamp);
        t.clock.advance(5);

        // now - timestamp == window: still valid.
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, timestamp, Some(signature))
            .unwrap();
    }

    #[test]
    fn test_update_identity_transfers_binding() {
        let t = TestNet::deploy();
        let id = tid(98_786_376_453);
        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap();

        let event = t
            .net
            .manager
            .update_identity(&BOB, APP_TWITTER, ALICE)
            .unwrap();
        assert_eq!(
            event,
            StoreEvent::BindingUpdated {
                app_id: APP_TWITTER,
                external_id: id,
                owner: ALICE
            }
        );
    }

    #[test]
    fn test_update_identity_requires_existing_binding() {
        let t = TestNet::deploy();
        let error = t
            .net
            .manager
            .update_identity(&MARK, APP_TWITTER, JOE)
            .unwrap_err();
        assert_eq!(
            error,
            ManagerError::IdentityNotFound {
                app_id: APP_TWITTER
            }
        );
    }

    #[test]
    fn test_update_identity_to_bound_address_rejected() {
        let t = TestNet::deploy();
        let bob_id = tid(10);
        let alice_id = tid(123);

        let signature = t.sign(BOB, APP_TWITTER, bob_id, t.now());
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, bob_id, t.now(), Some(signature))
            .unwrap();
        let signature = t.sign(ALICE, APP_TWITTER, alice_id, t.now());
        t.net
            .manager
            .set_identity(&ALICE, APP_TWITTER, alice_id, t.now(), Some(signature))
            .unwrap();

        let error = t
            .net
            .manager
            .update_identity(&BOB, APP_TWITTER, ALICE)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Uniqueness);
    }

    #[test]
    fn test_replayed_signature_fails_on_uniqueness_not_crypto() {
        let t = TestNet::deploy();
        let id = tid(555);
        let timestamp = t.now();
        let signature = t.sign(BOB, APP_TWITTER, id, timestamp);

        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, timestamp, Some(signature.clone()))
            .unwrap();

        // The very same signature replayed: still cryptographically fine,
        // but the state it authorized already exists.
        let error = t
            .net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, timestamp, Some(signature))
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Uniqueness);
    }
}
