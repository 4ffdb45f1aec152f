//! Scripted gateway for controller and SDK tests.
//!
//! Responses are queued per resource and consumed in order; submits are
//! queued globally. An optional gate lets a test hold a fetch in flight
//! while it pokes at controller state, then release it.

use async_trait::async_trait;
use rada_gateway::{Error, Gateway, Mutation, Resource, Result};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Default)]
pub struct ScriptedGateway {
    lists: Mutex<HashMap<Resource, VecDeque<std::result::Result<Value, String>>>>,
    submits: Mutex<VecDeque<std::result::Result<(), String>>>,
    submitted: Mutex<Vec<Mutation>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful list response for a resource.
    pub fn respond(self, resource: Resource, payload: Value) -> Self {
        self.lists
            .lock()
            .unwrap()
            .entry(resource)
            .or_default()
            .push_back(Ok(payload));
        self
    }

    /// Queue the built-in sample payload for a resource, in that
    /// endpoint's observed shape.
    pub fn respond_with_fixture(self, resource: Resource) -> Self {
        let payload = rada_gateway::fixtures::sample_payload(resource);
        self.respond(resource, payload)
    }

    /// Queue a failed list fetch for a resource.
    pub fn fail_list(self, resource: Resource, message: &str) -> Self {
        self.lists
            .lock()
            .unwrap()
            .entry(resource)
            .or_default()
            .push_back(Err(message.to_string()));
        self
    }

    /// Queue a rejected submit. Unqueued submits succeed.
    pub fn fail_submit(self, message: &str) -> Self {
        self.submits
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Hold every subsequent fetch until the returned handle is notified.
    pub fn hold_lists(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(notify.clone());
        notify
    }

    /// Mutations submitted so far, in order.
    pub fn submitted(&self) -> Vec<Mutation> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_list(&self, resource: Resource) -> Result<Value> {
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let next = self
            .lists
            .lock()
            .unwrap()
            .get_mut(&resource)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Ok(payload)) => Ok(payload),
            Some(Err(message)) => Err(Error::Backend(message)),
            None => Err(Error::Backend(format!(
                "no scripted response for '{}'",
                resource
            ))),
        }
    }

    async fn submit(&self, mutation: &Mutation) -> Result<()> {
        self.submitted.lock().unwrap().push(mutation.clone());

        let next = self.submits.lock().unwrap().pop_front();
        match next {
            Some(Err(message)) => Err(Error::Rejected(message)),
            _ => Ok(()),
        }
    }
}
