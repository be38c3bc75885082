//! # Invariant Checks
//!
//! Randomized operation sequences against the deployed stack, checking the
//! per-application bijection by replaying the store's own event log.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use il_02_binding_store::StoreEvent;
    use il_05_identity_manager::IdentityApi;
    use rand::prelude::*;
    use shared_types::{Address, AppId, ExternalId};
    use std::collections::HashMap;

    fn actor(index: u8) -> Address {
        let mut address = [0u8; 20];
        address[19] = 0x10 + index;
        address
    }

    /// Replay the event log into owner/id maps and assert both directions
    /// agree with the store's accessors and with each other.
    fn assert_bijection(t: &TestNet, apps: &[AppId]) {
        let mut owner_by_id: HashMap<(AppId, ExternalId), Address> = HashMap::new();
        for event in t.net.store.events() {
            match event {
                StoreEvent::BindingCreated {
                    app_id,
                    external_id,
                    owner,
                }
                | StoreEvent::BindingUpdated {
                    app_id,
                    external_id,
                    owner,
                } => {
                    owner_by_id.insert((app_id, external_id), owner);
                }
                StoreEvent::AppRegistered { .. } => {}
            }
        }

        for app_id in apps {
            let mut seen_owners: HashMap<Address, ExternalId> = HashMap::new();
            for ((event_app, external_id), owner) in &owner_by_id {
                if event_app != app_id {
                    continue;
                }
                // No owner appears under two external ids.
                assert!(
                    seen_owners.insert(*owner, *external_id).is_none(),
                    "owner bound twice within app {app_id}"
                );
                // The store agrees in both directions.
                assert_eq!(
                    t.net.store.owner_by_id(*app_id, *external_id),
                    Some(*owner)
                );
                assert_eq!(
                    t.net.store.id_by_owner(*app_id, owner),
                    Some(*external_id)
                );
            }
        }
    }

    #[test]
    fn test_bijection_under_random_bind_and_update() {
        let mut rng = StdRng::seed_from_u64(0x1D11);
        let t = TestNet::deploy();
        let apps = [APP_TWITTER, APP_REDDIT];

        for step in 0..200 {
            let caller = actor(rng.gen_range(0..8));
            let app_id = apps[rng.gen_range(0..apps.len())];

            if rng.gen_bool(0.6) {
                // Attempted bind with a random id; rejections are expected
                // and must leave no trace.
                let id = tid(rng.gen_range(1..40));
                let signature = t.sign(caller, app_id, id, t.now());
                let _ = t
                    .net
                    .manager
                    .set_identity(&caller, app_id, id, t.now(), Some(signature));
            } else {
                // Attempted transfer to a random peer.
                let target = actor(rng.gen_range(0..8));
                let _ = t.net.manager.update_identity(&caller, app_id, target);
            }

            if step % 20 == 0 {
                assert_bijection(&t, &apps);
            }
        }
        assert_bijection(&t, &apps);
    }

    #[test]
    fn test_event_log_matches_final_state() {
        let t = TestNet::deploy();
        let id = tid(637_800_044);
        let signature = t.sign(BOB, APP_TWITTER, id, t.now());
        t.net
            .manager
            .set_identity(&BOB, APP_TWITTER, id, t.now(), Some(signature))
            .unwrap();
        t.net
            .manager
            .update_identity(&BOB, APP_TWITTER, ALICE)
            .unwrap();

        // App registrations from deployment, then exactly our two moves.
        let events: Vec<_> = t
            .net
            .store
            .events()
            .into_iter()
            .filter(|event| !matches!(event, StoreEvent::AppRegistered { .. }))
            .collect();
        assert_eq!(
            events,
            vec![
                StoreEvent::BindingCreated {
                    app_id: APP_TWITTER,
                    external_id: id,
                    owner: BOB
                },
                StoreEvent::BindingUpdated {
                    app_id: APP_TWITTER,
                    external_id: id,
                    owner: ALICE
                },
            ]
        );
    }
}
