use crate::clients::{HttpOrderClient, OrderApi};
use crate::error::AppError;
use crate::lifecycle::AppConfig;
use crate::model::Customer;
use crate::screen::{ScreenActor, ScreenClient};
use tracing::{error, info};

/// Event channel capacity for the screen actor.
const SCREEN_BUFFER: usize = 32;

/// Runtime orchestrator for the order-entry screen.
///
/// `OrderEntryApp` is responsible for:
/// - **Dependency Wiring**: building the backend client and handing it, together
///   with the configured customer, to the screen actor
/// - **Lifecycle Management**: spawning the actor and shutting it down
///
/// # Example
///
/// ```ignore
/// let app = OrderEntryApp::start(&AppConfig::load()?)?;
///
/// app.screen.select_product(ProductId(1)).await?;
/// app.screen.add_item().await?;
/// app.screen.submit().await?;
///
/// app.shutdown().await?;
/// ```
pub struct OrderEntryApp {
    /// Handle for sending events to the screen.
    pub screen: ScreenClient,

    handle: tokio::task::JoinHandle<()>,
}

impl OrderEntryApp {
    /// Starts the screen against the HTTP backend named in `config`.
    pub fn start(config: &AppConfig) -> Result<Self, AppError> {
        let api = HttpOrderClient::new(config.api_base_url.as_str())?;
        info!(base_url = api.base_url(), "Using order backend");
        Ok(Self::with_api(api, config.customer.clone()))
    }

    /// Starts the screen against any [`OrderApi`] implementation.
    ///
    /// The initial load begins immediately in the background.
    pub fn with_api<A: OrderApi + 'static>(api: A, customer: Customer) -> Self {
        let (actor, screen) = ScreenActor::new(SCREEN_BUFFER);
        let handle = tokio::spawn(actor.run(api, customer));
        Self { screen, handle }
    }

    /// Gracefully shuts down the screen.
    ///
    /// Dropping the client closes the event channel; the actor finishes the
    /// event it is on (including any in-flight request) and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(AppError::Task)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down screen...");
        drop(self.screen);

        if let Err(e) = self.handle.await {
            error!("Screen task failed: {:?}", e);
            return Err(AppError::Task(e.to_string()));
        }

        info!("Shutdown complete.");
        Ok(())
    }
}
