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

//! The interaction side of the plugin: a menu toggle that turns point
//! picking on and off, and the click pipeline that runs while it is on.

use std::mem;
use std::sync::Arc;

use async_channel::Receiver;
use chrono::Utc;
use log::info;

use crate::event::{ClickEvent, ClickManager};
use crate::host::{IdentifyMode, MapControls, PanelFactory, PluginButton, Projector};
use crate::i18n::TranslationSet;
use crate::lookup;
use crate::lookup::LookupService;
use crate::model::point::WGS84;
use crate::output::Presenter;

/// Picking is a two state affair. Holding the subscription inside the
/// active state means there is never an active plugin without exactly
/// one subscription, and never a subscription left behind after
/// deactivation.
enum InteractionState {
    Inactive,
    Active {
        subscription: Receiver<ClickEvent>,
        saved_identify: IdentifyMode,
    },
}

pub struct CoordInfo {
    clicks: Arc<ClickManager>,
    controls: Box<dyn MapControls>,
    projector: Box<dyn Projector>,
    button: Box<dyn PluginButton>,
    service: Box<dyn LookupService>,
    presenter: Presenter,
    table: &'static TranslationSet,
    state: InteractionState,
    generation: u64,
}

impl CoordInfo {
    pub fn new(
        clicks: Arc<ClickManager>,
        controls: Box<dyn MapControls>,
        projector: Box<dyn Projector>,
        button: Box<dyn PluginButton>,
        service: Box<dyn LookupService>,
        panels: Box<dyn PanelFactory>,
        table: &'static TranslationSet,
    ) -> Self {
        Self {
            clicks,
            controls,
            projector,
            button,
            service,
            presenter: Presenter::new(panels, table),
            table,
            state: InteractionState::Inactive,
            generation: 0,
        }
    }

    /// Labels the menu button for the viewer's current language.
    pub fn init(&mut self) {
        let lang = self.controls.current_lang();
        self.button.set_label(self.table.get(lang).coord_button_label);
        info!("Coord info plugin registered for {}", lang.code());
    }

    /// The menu action. Flips between picking and not picking,
    /// applying or rolling back the cursor, button and identify-mode
    /// side effects with the matching transition.
    pub fn toggle(&mut self) {
        self.controls.close_side_nav();
        self.state = match mem::replace(&mut self.state, InteractionState::Inactive) {
            InteractionState::Inactive => self.activate(),
            InteractionState::Active { saved_identify, .. } => self.deactivate(saved_identify),
        };
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, InteractionState::Active { .. })
    }

    fn activate(&mut self) -> InteractionState {
        let subscription = self.clicks.subscribe();
        self.controls.set_map_cursor("crosshair");
        self.button.set_active(true);
        let saved_identify = self.controls.identify_mode();
        self.controls.set_identify_mode(IdentifyMode::none());
        info!("Point picking on");
        InteractionState::Active {
            subscription,
            saved_identify,
        }
    }

    // The old subscription was dropped by the toggle, which is all the
    // click manager needs to stop delivering.
    fn deactivate(&mut self, saved_identify: IdentifyMode) -> InteractionState {
        self.controls.set_map_cursor("");
        self.button.set_active(false);
        self.controls.set_identify_mode(saved_identify);
        info!("Point picking off");
        InteractionState::Inactive
    }

    /// Drains the click subscription and runs the lookup pipeline for
    /// each click. Call from the host main loop; does nothing while
    /// picking is off.
    pub fn process_pending_clicks(&mut self) {
        loop {
            let event = match &self.state {
                InteractionState::Active { subscription, .. } => match subscription.try_recv() {
                    Ok(event) => event,
                    Err(_) => return,
                },
                InteractionState::Inactive => return,
            };
            self.handle_click(&event);
        }
    }

    fn handle_click(&mut self, event: &ClickEvent) {
        let lang = self.controls.current_lang();
        let point = event.get_point().with_spatial_reference(WGS84);
        let dms = self.projector.to_dms(&point);
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let transport = self.controls.transport();

        self.generation += 1;
        let generation = self.generation;

        let info = lookup::gather(
            self.service.as_ref(),
            self.projector.as_ref(),
            &point,
            dms,
            date,
            transport,
            self.table.get(lang),
        );
        self.presenter.present(&info, generation, lang);
    }
}
