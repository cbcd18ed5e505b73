use std::time::Duration;

use iced::{Subscription, event, mouse, window};

use crate::app::{App, Event};
use crate::features::panel::{PANEL_TICK_MS, PanelEvent};
use crate::features::toast::{TOAST_TICK_MS, ToastEvent};
use crate::state::SPINNER_TICK_MS;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));
    let key_subs = iced::keyboard::listen().map(Event::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Window-level pointer listener lives exactly as long as the drag.
    if app.features.panel().is_resizing() {
        subs.push(event::listen_with(drag_pointer_event));
    }

    if app.features.panel().is_transitioning() {
        subs.push(
            iced::time::every(Duration::from_millis(PANEL_TICK_MS))
                .map(|_| Event::Panel(PanelEvent::Tick)),
        );
    }

    if app.features.toast().needs_tick() {
        subs.push(
            iced::time::every(Duration::from_millis(TOAST_TICK_MS))
                .map(|_| Event::Toast(ToastEvent::Tick)),
        );
    }

    if app.features.documents().is_busy() {
        subs.push(
            iced::time::every(Duration::from_millis(SPINNER_TICK_MS))
                .map(|_| Event::SpinnerTick),
        );
    }

    Subscription::batch(subs)
}

fn drag_pointer_event(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Event> {
    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Event::Panel(PanelEvent::PointerMoved { x: position.x }))
        },
        iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )) => Some(Event::Panel(PanelEvent::PointerReleased)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, event, mouse, window};

    use super::drag_pointer_event;
    use crate::app::Event;
    use crate::features::panel::PanelEvent;

    fn map(event: iced::Event) -> Option<Event> {
        drag_pointer_event(event, event::Status::Ignored, window::Id::unique())
    }

    #[test]
    fn given_cursor_moved_when_dragging_then_pointer_x_is_forwarded() {
        let event = map(iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(312.5, 40.0),
        }));

        assert!(matches!(
            event,
            Some(Event::Panel(PanelEvent::PointerMoved { x })) if x == 312.5
        ));
    }

    #[test]
    fn given_left_button_released_when_dragging_then_release_is_forwarded() {
        let event = map(iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));

        assert!(matches!(
            event,
            Some(Event::Panel(PanelEvent::PointerReleased))
        ));
    }

    #[test]
    fn given_unrelated_input_when_dragging_then_nothing_is_forwarded() {
        let right = map(iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Right,
        )));
        let pressed = map(iced::Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        )));

        assert!(right.is_none());
        assert!(pressed.is_none());
    }
}
