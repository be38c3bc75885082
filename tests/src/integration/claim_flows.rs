//! # Claim / Probation / Takeover Flows
//!
//! The adversarial path: a second address proves control of an already
//! bound external identifier and contests the binding through the
//! probation-gated claim workflow.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use il_02_binding_store::StoreEvent;
    use il_03_claim_registry::{ClaimError, ClaimEvent};
    use il_05_identity_manager::{ErrorKind, IdentityApi, ManagerError};
    use shared_types::ExternalId;

    /// Bind `id` to Bob with a fresh validator signature.
    fn bind_to_bob(t: &TestNet, id: ExternalId) {
        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap();
    }

    #[test]
    fn test_claim_identity_emits_event() {
        let t = TestNet::deploy();
        let id = tid(203_434_323_454);
        bind_to_bob(&t, id);

        let signature = t.sign(ALICE, APP_TWITTER, id, t.now());
        let event = t
            .net
            .manager
            .claim_identity(&ALICE, APP_TWITTER, id, t.now(), signature)
            .unwrap();
        assert_eq!(
            event,
            ClaimEvent::ClaimStarted {
                app_id: APP_TWITTER,
                external_id: id,
                claimant: ALICE
            }
        );
        // Ownership untouched while the claim pends.
        assert_eq!(t.net.store.owner_by_id(APP_TWITTER, id), Some(BOB));
    }

    #[test]
    fn test_claim_nonexistent_identity() {
        let t = TestNet::deploy();
        let id = tid(999);
        let signature = t.sign(ALICE, APP_TWITTER, id, t.now());

        let error = t
            .net
            .manager
            .claim_identity(&ALICE, APP_TWITTER, id, t.now(), signature)
            .unwrap_err();
        assert_eq!(
            error,
            ManagerError::ClaimedIdentityNotFound {
                app_id: APP_TWITTER
            }
        );
    }

    #[test]
    fn test_claimer_with_identity_rejected() {
        let t = TestNet::deploy();
        let bob_id = tid(100);
        bind_to_bob(&t, bob_id);

        let alice_id = tid(837_464_536);
        let signature = t.sign(ALICE, APP_TWITTER, alice_id, t.now());
        t.net
            .manager
            .set_identity(&ALICE, APP_TWITTER, alice_id, t.now(), Some(signature))
            .unwrap();

        let signature = t.sign(ALICE, APP_TWITTER, bob_id, t.now());
        let error = t
            .net
            .manager
            .claim_identity(&ALICE, APP_TWITTER, bob_id, t.now(), signature)
            .unwrap_err();
        assert_eq!(
            error,
            ManagerError::ClaimerOwnsIdentity {
                app_id: APP_TWITTER
            }
        );
    }

    #[test]
    fn test_concurrent_claim_rejected() {
        let t = TestNet::deploy();
        let id = tid(100);
        bind_to_bob(&t, id);

        let signature = t.sign(ALICE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&ALICE, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        let error = t
            .net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap_err();
        assert_eq!(error, ManagerError::Claim(ClaimError::ClaimPending));
        assert_eq!(error.kind(), ErrorKind::Uniqueness);
    }

    #[test]
    fn test_cancel_claim_reopens_slot() {
        let t = TestNet::deploy();
        let id = tid(100);
        bind_to_bob(&t, id);

        let signature = t.sign(ALICE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&ALICE, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        let event = t
            .net
            .manager
            .cancel_active_claim(&ALICE, APP_TWITTER)
            .unwrap();
        assert_eq!(
            event,
            ClaimEvent::ClaimCanceled {
                app_id: APP_TWITTER,
                external_id: id,
                claimant: ALICE
            }
        );

        // Joe can now contest the same binding.
        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        assert!(t
            .net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .is_ok());
    }

    #[test]
    fn test_takeover_too_early() {
        let t = TestNet::deploy();
        t.net
            .claims
            .update_probation_times(&DEPLOYER, None, 10, 1)
            .unwrap();
        let id = tid(100);
        bind_to_bob(&t, id);

        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        // One second short of probation.
        t.clock.advance(9);
        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        let error = t
            .net
            .manager
            .update_claimed_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap_err();
        assert!(matches!(
            error,
            ManagerError::Claim(ClaimError::ProbationNotElapsed { .. })
        ));
        assert_eq!(error.kind(), ErrorKind::Timing);
    }

    #[test]
    fn test_takeover_too_late() {
        let t = TestNet::deploy();
        t.net
            .claims
            .update_probation_times(&DEPLOYER, None, 2, 1)
            .unwrap();
        let id = tid(100);
        bind_to_bob(&t, id);

        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        // Past probation + window.
        t.clock.advance(5);
        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        let error = t
            .net
            .manager
            .update_claimed_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap_err();
        assert_eq!(error, ManagerError::Claim(ClaimError::ClaimExpired));
        assert_eq!(t.net.store.owner_by_id(APP_TWITTER, id), Some(BOB));
    }

    #[test]
    fn test_takeover_succeeds_inside_window() {
        let t = TestNet::deploy();
        t.net
            .claims
            .update_probation_times(&DEPLOYER, None, 2, 10)
            .unwrap();
        let id = tid(100);
        bind_to_bob(&t, id);

        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        t.clock.advance(5);
        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        let event = t
            .net
            .manager
            .update_claimed_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap();
        assert_eq!(
            event,
            StoreEvent::BindingUpdated {
                app_id: APP_TWITTER,
                external_id: id,
                owner: JOE
            }
        );

        // The takeover is complete in both directions, and Bob's slot in
        // the app is free again.
        assert_eq!(t.net.store.owner_by_id(APP_TWITTER, id), Some(JOE));
        assert_eq!(t.net.store.id_by_owner(APP_TWITTER, &JOE), Some(id));
        assert_eq!(t.net.store.id_by_owner(APP_TWITTER, &BOB), None);
        assert_eq!(t.net.claims.claim_of(APP_TWITTER, &JOE), None);
    }

    #[test]
    fn test_probation_window_full_grid() {
        // probation = 10, window = 1: fail at 9, succeed at 10 and 11,
        // fail at 12.
        for (elapsed, should_succeed) in [(9u64, false), (10, true), (11, true), (12, false)] {
            let t = TestNet::deploy();
            t.net
                .claims
                .update_probation_times(&DEPLOYER, None, 10, 1)
                .unwrap();
            let id = tid(100);
            bind_to_bob(&t, id);

            let signature = t.sign(JOE, APP_TWITTER, id, t.now());
            t.net
                .manager
                .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
                .unwrap();

            t.clock.advance(elapsed);
            let signature = t.sign(JOE, APP_TWITTER, id, t.now());
            let result = t
                .net
                .manager
                .update_claimed_identity(&JOE, APP_TWITTER, id, t.now(), signature);
            assert_eq!(
                result.is_ok(),
                should_succeed,
                "elapsed={elapsed} expected success={should_succeed}"
            );
        }
    }

    #[test]
    fn test_takeover_needs_fresh_signature() {
        let t = TestNet::deploy();
        t.net
            .claims
            .update_probation_times(&DEPLOYER, None, 2, 10)
            .unwrap();
        t.net
            .verifier
            .update_validity_window(&DEPLOYER, Some(APP_TWITTER), 3)
            .unwrap();
        let id = tid(100);
        bind_to_bob(&t, id);

        let claim_time = t.now();
        let claim_signature = t.sign(JOE, APP_TWITTER, id, claim_time);
        t.net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, claim_time, claim_signature.clone())
            .unwrap();

        // Reusing the claim-time attestation after probation: it has aged
        // past the validity window and is rejected as expired, so the
        // claimant must come back with a fresh proof of control.
        t.clock.advance(5);
        let error = t
            .net
            .manager
            .update_claimed_identity(&JOE, APP_TWITTER, id, claim_time, claim_signature)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Authorization);

        let fresh = t.sign(JOE, APP_TWITTER, id, t.now());
        assert!(t
            .net
            .manager
            .update_claimed_identity(&JOE, APP_TWITTER, id, t.now(), fresh)
            .is_ok());
    }

    #[test]
    fn test_owner_can_reclaim_after_losing() {
        // The state machine has no terminal state: after a takeover the
        // original owner can contest the binding right back.
        let t = TestNet::deploy();
        t.net
            .claims
            .update_probation_times(&DEPLOYER, None, 2, 10)
            .unwrap();
        let id = tid(100);
        bind_to_bob(&t, id);

        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap();
        t.clock.advance(3);
        let signature = t.sign(JOE, APP_TWITTER, id, t.now());
        t.net
            .manager
            .update_claimed_identity(&JOE, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .claim_identity(&BOB, APP_TWITTER, id, t.now(), signature)
            .unwrap();
        t.clock.advance(3);
        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .update_claimed_identity(&BOB, APP_TWITTER, id, t.now(), signature)
            .unwrap();

        assert_eq!(t.net.store.owner_by_id(APP_TWITTER, id), Some(BOB));
    }
}
