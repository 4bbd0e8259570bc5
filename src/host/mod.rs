/*
 * Copyright (c) 2023-2026. Trevor Campbell and others.
 *
 * This file is part of Coord Info.
 *
 * Coord Info is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Coord Info is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Coord Info; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

//! The seams between the plugin and the host map viewer. The viewer
//! supplies implementations of these traits; the plugin never talks to
//! the viewer any other way.

use std::error::Error;

use crate::i18n::Locale;
use crate::model::point::{DmsPoint, Point};

/// The viewer's identify feature setting, opaque to the plugin apart
/// from the `none` value used to suppress it while picking points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyMode(String);

impl IdentifyMode {
    pub fn new(mode: &str) -> Self {
        Self(mode.to_string())
    }

    pub fn none() -> Self {
        Self("none".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Scheme the host page was served over. The declination service is
/// only reachable from a plaintext page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Https,
}

impl Transport {
    pub fn is_secure(&self) -> bool {
        matches!(self, Transport::Https)
    }
}

/// Coordinate conversion supplied by the viewer: reprojection between
/// spatial references and decimal-degree to DMS rendering.
pub trait Projector: Send + Sync {
    fn project(&self, point: &Point, spatial_reference: u32) -> Result<Point, Box<dyn Error + Send + Sync>>;

    fn to_dms(&self, point: &Point) -> DmsPoint;
}

/// Viewer state the plugin reads and drives while picking is active.
pub trait MapControls {
    fn set_map_cursor(&self, cursor: &str);

    fn identify_mode(&self) -> IdentifyMode;

    fn set_identify_mode(&self, mode: IdentifyMode);

    fn close_side_nav(&self);

    fn current_lang(&self) -> Locale;

    fn transport(&self) -> Transport;
}

/// Layout options applied when the plugin's panel is first created.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOptions {
    pub width_px: u32,
    pub anchor_bottom: bool,
    pub keep_alive: bool,
    pub mobile_fullscreen: bool,
}

/// A side panel owned by the viewer. The plugin holds on to the one
/// panel it creates and reuses it for every click.
pub trait Panel {
    fn set_title(&mut self, title: &str);

    fn set_body(&mut self, markup: &str);

    fn open(&mut self);

    fn close(&mut self);
}

pub trait PanelFactory {
    fn create_panel(&self, id: &str, options: PanelOptions) -> Box<dyn Panel>;
}

/// The menu button the viewer registered for the plugin.
pub trait PluginButton {
    fn set_label(&mut self, label: &str);

    fn set_active(&mut self, active: bool);
}
