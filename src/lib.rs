//! Coord Info is a map viewer plugin that reports information about a
//! clicked map location: geographic and UTM coordinates, NTS map sheet
//! names, elevation and, where the service is reachable, magnetic
//! declination.
//!
//! The host viewer supplies the click stream, coordinate projection and
//! the panel widgets through the traits in [`host`]; the plugin supplies
//! the lookup pipeline and the rendered panel content. A typical host
//! embeds the plugin like this:
//!
//! ```no_run
//! use std::sync::Arc;
//! use coord_info::event::ClickManager;
//! use coord_info::i18n::TRANSLATIONS;
//! use coord_info::lookup::GeogratisClient;
//! use coord_info::plugin::CoordInfo;
//! # use coord_info::host::{MapControls, Projector, PanelFactory, PluginButton};
//! # fn host_pieces() -> (Box<dyn MapControls>, Box<dyn Projector>, Box<dyn PluginButton>, Box<dyn PanelFactory>) { unimplemented!() }
//!
//! let _logger = coord_info::util::Logger::new();
//! let clicks = Arc::new(ClickManager::new());
//! let (controls, projector, button, panels) = host_pieces();
//! let service = Box::new(GeogratisClient::from_preferences());
//! let mut plugin = CoordInfo::new(
//!     clicks.clone(), controls, projector, button, service, panels, &TRANSLATIONS,
//! );
//! plugin.init();
//! // wire plugin.toggle() to the menu button and pump
//! // plugin.process_pending_clicks() from the host main loop.
//! ```
#![forbid(unsafe_code)]

pub mod event;
pub mod host;
pub mod i18n;
pub mod lookup;
pub mod model;
pub mod output;
pub mod plugin;
pub mod preference;
pub mod util;
