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

//! Renders a gathered answer into panel markup and keeps the one panel
//! the plugin ever creates up to date.

use log::{debug, info};

use crate::host::{Panel, PanelFactory, PanelOptions};
use crate::i18n::{Locale, TranslationSet, Translations};
use crate::model::coord_info::CoordinateInfo;

pub(crate) mod template;

const PANEL_ID: &str = "coord-info";
const PANEL_WIDTH_PX: u32 = 400;

pub struct Presenter {
    factory: Box<dyn PanelFactory>,
    panel: Option<Box<dyn Panel>>,
    table: &'static TranslationSet,
    latest_generation: u64,
}

impl Presenter {
    pub fn new(factory: Box<dyn PanelFactory>, table: &'static TranslationSet) -> Self {
        Self {
            factory,
            panel: None,
            table,
            latest_generation: 0,
        }
    }

    /// Renders the answer into the panel. Answers from clicks older
    /// than the newest one already shown are dropped, so overlapping
    /// aggregations cannot leave stale content on screen. Returns
    /// whether the answer was shown.
    pub fn present(&mut self, info: &CoordinateInfo, generation: u64, locale: Locale) -> bool {
        if generation < self.latest_generation {
            debug!("Dropping stale answer for click {}", generation);
            return false;
        }
        self.latest_generation = generation;

        let text = self.table.get(locale);
        let markup = render(info, text);

        if let Some(panel) = self.panel.as_mut() {
            panel.close();
        } else {
            info!("Creating the {} panel", PANEL_ID);
        }
        let factory = &self.factory;
        let panel = self.panel.get_or_insert_with(|| {
            let mut panel = factory.create_panel(
                PANEL_ID,
                PanelOptions {
                    width_px: PANEL_WIDTH_PX,
                    anchor_bottom: true,
                    keep_alive: true,
                    mobile_fullscreen: true,
                },
            );
            panel.set_title(text.coord_button_label);
            panel
        });
        panel.set_body(&markup);
        panel.open();
        true
    }
}

fn render(info: &CoordinateInfo, text: &Translations) -> String {
    let output = template::BASE
        // labels
        .replace("{coordSection}", text.coord_section)
        .replace("{coordDecimal}", text.coord_decimal)
        .replace("{coordDMS}", text.coord_dms)
        .replace("{coordLat}", text.coord_lat)
        .replace("{coordLong}", text.coord_long)
        .replace("{utmSection}", text.utm_section)
        .replace("{utmZone}", text.utm_zone)
        .replace("{utmEast}", text.utm_east)
        .replace("{utmNorth}", text.utm_north)
        .replace("{ntsSection}", text.nts_section)
        .replace("{altiSection}", text.alti_section)
        // coord
        .replace("{pt.y}", &format!("{:.6}", info.get_point().get_y()))
        .replace("{pt.x}", &format!("{:.6}", info.get_point().get_x()))
        .replace("{dms.y}", info.get_dms().get_y())
        .replace("{dms.x}", info.get_dms().get_x())
        // utm
        .replace("{zone}", info.get_utm().get_zone())
        .replace("{outPt.x}", info.get_utm().get_out_pt().get_x())
        .replace("{outPt.y}", info.get_utm().get_out_pt().get_y())
        // nts
        .replace("{nts250}", info.get_nts().get_nts250())
        .replace("{nts50}", info.get_nts().get_nts50())
        // alti
        .replace("{elevation}", &info.get_elevation().to_string());

    let mag_section = match info.get_declination() {
        Some(declination) => template::MAG_SECTION
            .replace("{magTitle}", text.mag_section)
            .replace("{magDate}", text.mag_date)
            .replace("{magDecli}", text.mag_decli)
            .replace("{magChange}", text.mag_change)
            .replace("{date}", info.get_date())
            .replace("{magnetic}", declination.get_magnetic())
            .replace("{annChange}", declination.get_ann_change())
            .replace("{compass}", declination.get_compass()),
        None => String::new(),
    };
    output.replace("{magSection}", &mag_section)
}
