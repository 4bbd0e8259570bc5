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

use std::sync::RwLock;

use async_channel::{Receiver, Sender, TrySendError};
use log::warn;

use crate::model::point::Point;

/// A map click as delivered by the host viewer. The point carries the
/// spatial reference the viewer produced it in.
#[derive(Clone, PartialEq, Debug)]
pub struct ClickEvent {
    point: Point,
}

impl ClickEvent {
    pub fn new(point: Point) -> Self {
        Self { point }
    }

    pub fn get_point(&self) -> &Point {
        &self.point
    }
}

/// Fan-out point for map clicks. The host pushes every click through
/// `notify`; each subscriber gets its own copy on its own channel.
/// Dropping the receiver is the only way to unsubscribe.
pub struct ClickManager {
    listeners: RwLock<Vec<Sender<ClickEvent>>>,
}

impl ClickManager {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    // Registers a listener for map clicks.
    // Returns a receiver that will receive a copy of each click when notified.
    pub fn subscribe(&self) -> Receiver<ClickEvent> {
        let (tx, rx) = async_channel::unbounded::<ClickEvent>();
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push(tx);
        }
        rx
    }

    /// Deliver a click to every live subscriber.
    pub fn notify(&self, event: ClickEvent) {
        if let Ok(listeners) = self.listeners.read() {
            for listener in listeners.iter() {
                match listener.try_send(event.clone()) {
                    Ok(_) => {}
                    Err(TrySendError::Closed(_)) => {
                        warn!("Click listener channel closed");
                    }
                    Err(TrySendError::Full(_)) => {}
                }
            }
        }
        if let Ok(mut listeners) = self.listeners.write() {
            // Remove closed senders
            listeners.retain(|l| !l.is_closed());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|l| l.len()).unwrap_or(0)
    }
}

impl Default for ClickManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::point::{Point, WGS84};
    use async_channel::TryRecvError;

    fn click_at(x: f64, y: f64) -> ClickEvent {
        ClickEvent::new(Point::new(x, y, WGS84))
    }

    #[test]
    fn test_subscribe() {
        let manager = ClickManager::new();

        let receiver = manager.subscribe();
        assert_eq!(manager.listener_count(), 1);
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_notify() {
        let manager = ClickManager::new();

        let receiver = manager.subscribe();
        manager.notify(click_at(-75.0, 45.0));

        match receiver.try_recv() {
            Ok(event) => assert_eq!(event.get_point().get_x(), -75.0),
            Err(_) => panic!("Expected click not received"),
        }
    }

    #[test]
    fn test_notify_multiple_listeners() {
        let manager = ClickManager::new();

        let receiver1 = manager.subscribe();
        let receiver2 = manager.subscribe();
        manager.notify(click_at(151.0, -34.0));

        match receiver1.try_recv() {
            Ok(event) => assert_eq!(event.get_point().get_y(), -34.0),
            Err(_) => panic!("Expected click not received by listener 1"),
        }

        match receiver2.try_recv() {
            Ok(event) => assert_eq!(event.get_point().get_y(), -34.0),
            Err(_) => panic!("Expected click not received by listener 2"),
        }
    }

    #[test]
    fn test_listener_channel_closed() {
        let manager = ClickManager::new();

        let receiver = manager.subscribe();
        drop(receiver); // Close the receiver

        manager.notify(click_at(0.0, 0.0));

        // Ensure no listeners are left
        assert_eq!(manager.listener_count(), 0);
    }

    #[test]
    fn test_clicks_arrive_in_order() {
        let manager = ClickManager::new();

        let receiver = manager.subscribe();
        manager.notify(click_at(1.0, 1.0));
        manager.notify(click_at(2.0, 2.0));

        assert_eq!(receiver.try_recv().unwrap().get_point().get_x(), 1.0);
        assert_eq!(receiver.try_recv().unwrap().get_point().get_x(), 2.0);
        match receiver.try_recv() {
            Err(TryRecvError::Empty) => {}
            _ => panic!("Expected no further clicks"),
        }
    }
}
