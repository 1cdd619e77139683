use bevy::prelude::*;
use bevy::tasks::{block_on, IoTaskPool, Task};

use simulation::config::DashboardSettings;

use super::fetch::{build_agent, fetch_logo, BrandingError};

#[derive(Debug, Clone, PartialEq)]
pub enum LogoState {
    /// Request in flight.
    Pending,
    Ready {
        handle: Handle<Image>,
        /// Native pixel size, used to keep the aspect ratio on screen.
        size: UVec2,
    },
    Failed(BrandingError),
    /// Fetching disabled by configuration.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoSlot {
    pub url: String,
    pub state: LogoState,
}

/// One slot per configured logo URL, in display order.
#[derive(Resource, Debug, Clone, Default)]
pub struct BrandingLogos {
    pub slots: Vec<LogoSlot>,
}

impl BrandingLogos {
    pub fn is_settled(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| !matches!(slot.state, LogoState::Pending))
    }

    pub fn errors(&self) -> impl Iterator<Item = &BrandingError> {
        self.slots.iter().filter_map(|slot| match &slot.state {
            LogoState::Failed(err) => Some(err),
            _ => None,
        })
    }
}

/// In-flight download for the logo slot at `slot`.
#[derive(Component)]
pub struct LogoFetchTask {
    slot: usize,
    task: Task<Result<Image, BrandingError>>,
}

/// Fire one request per configured logo. Runs once at startup.
pub fn start_logo_fetches(
    mut commands: Commands,
    settings: Res<DashboardSettings>,
    mut logos: ResMut<BrandingLogos>,
) {
    let initial = if settings.fetch_logos {
        LogoState::Pending
    } else {
        LogoState::Skipped
    };
    logos.slots = settings
        .logo_urls
        .iter()
        .map(|url| LogoSlot {
            url: url.clone(),
            state: initial.clone(),
        })
        .collect();

    if !settings.fetch_logos {
        info!("Logo fetching disabled, skipping {} logos", logos.slots.len());
        return;
    }

    let agent = build_agent(settings.fetch_timeout);
    let pool = IoTaskPool::get();
    for (slot, url) in settings.logo_urls.iter().enumerate() {
        let agent = agent.clone();
        let url = url.clone();
        let task = pool.spawn(async move { fetch_logo(&agent, &url) });
        commands.spawn(LogoFetchTask { slot, task });
    }
}

/// Move finished downloads into their slots.
pub fn poll_logo_fetches(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LogoFetchTask)>,
    mut images: ResMut<Assets<Image>>,
    mut logos: ResMut<BrandingLogos>,
) {
    for (entity, mut fetch) in &mut tasks {
        let Some(result) = block_on(futures_lite::future::poll_once(&mut fetch.task)) else {
            continue;
        };
        commands.entity(entity).despawn();

        let Some(slot) = logos.slots.get_mut(fetch.slot) else {
            continue;
        };
        slot.state = match result {
            Ok(image) => {
                let size = image.size();
                info!("Loaded logo {} ({}x{})", slot.url, size.x, size.y);
                LogoState::Ready {
                    handle: images.add(image),
                    size,
                }
            }
            Err(err) => {
                warn!("Logo unavailable: {err}");
                LogoState::Failed(err)
            }
        };
    }
}
