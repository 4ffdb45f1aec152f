use crate::screens;
use crate::Result;
use rada_engine::{ListController, ScreenSpec};
use rada_gateway::{Config, Gateway, Resource, create_gateway};
use rada_types::{Buddy, DiscussionPost, LearnModule, Notification, StudyGroup};
use std::sync::Arc;

/// Facade handing out one preconfigured controller per list screen.
///
/// The client owns the gateway selected by configuration; controllers
/// share it. Each accessor returns a fresh controller because each screen
/// instance owns its list exclusively.
pub struct Client {
    gateway: Arc<dyn Gateway>,
    config: Config,
}

impl Client {
    /// Connect using the config file (fixtures backend when absent).
    pub fn connect() -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(config)
    }

    /// Connect with an explicit configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let gateway = create_gateway(&config)?;
        Ok(Self { gateway, config })
    }

    /// Connect with a caller-supplied gateway (tests, embedding).
    pub fn with_gateway(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            config: Config::default(),
        }
    }

    /// ID of the backend in use ("fixtures" or "http")
    pub fn gateway_id(&self) -> &'static str {
        self.gateway.id()
    }

    /// Controller for the study-buddies screen
    pub fn buddies(&self) -> ListController<Buddy> {
        self.controller(Resource::Buddies, screens::buddy_filters())
    }

    /// Controller for the groups screen
    pub fn groups(&self) -> ListController<StudyGroup> {
        self.controller(Resource::Groups, screens::group_filters())
    }

    /// Controller for the discussions feed
    pub fn discussions(&self) -> ListController<DiscussionPost> {
        self.controller(Resource::Discussions, screens::discussion_filters())
    }

    /// Controller for the notifications screen
    pub fn notifications(&self) -> ListController<Notification> {
        self.controller(Resource::Notifications, screens::notification_filters())
    }

    /// Controller for the module hub
    pub fn modules(&self) -> ListController<LearnModule> {
        self.controller(Resource::Modules, screens::module_filters())
    }

    fn controller<T>(
        &self,
        resource: Resource,
        filters: rada_engine::FilterSet<T>,
    ) -> ListController<T>
    where
        T: rada_types::ListEntry + Clone + serde::de::DeserializeOwned,
    {
        ListController::new(
            self.gateway.clone(),
            ScreenSpec::for_resource(resource),
            filters,
            self.config.rollback.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_connects_to_fixtures() {
        let client = Client::from_config(Config::default()).unwrap();
        assert_eq!(client.gateway_id(), "fixtures");
    }
}
