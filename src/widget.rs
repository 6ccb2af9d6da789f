// SPDX-License-Identifier: MPL-2.0
//! Overlay host and capsule rendering.
//!
//! [`host`] wraps the application's top-level content and layers the toast
//! stack above it. Layers built from plain containers never capture pointer
//! events in an [`iced::widget::Stack`], so input outside a capsule's drawn
//! bounds tunnels through to the content below; only the `mouse_area`
//! wrapping each capsule claims events. That reproduces the inverted
//! hit-testing of a pass-through platform overlay without one.

use crate::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::manager::Manager;
use crate::stack;
use crate::toast::{Anchor, Toast};
use crate::translate::translate;
use crate::Message;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, responsive, text, Container, Row, Stack, Text};
use iced::{mouse, Element, Length, Padding, Size, Theme, Vector};
use std::time::Instant;

/// Wraps top-level application content, rendering the toast stack above it.
///
/// Call this exactly once, around the whole view; `lift` maps toast
/// messages into the host application's message type.
pub fn host<'a, M: 'a>(
    content: Element<'a, M>,
    manager: &'a Manager,
    lift: impl Fn(Message) -> M + 'a,
) -> Element<'a, M> {
    if !manager.has_toasts() {
        return content;
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(overlay(manager).map(lift))
        .into()
}

/// Renders the toast stack on its own transparent, full-size layer.
pub fn overlay(manager: &Manager) -> Element<'_, Message> {
    responsive(move |size| layer(manager, size, Instant::now())).into()
}

fn layer(manager: &Manager, size: Size, now: Instant) -> Element<'_, Message> {
    let entries = manager.entries();

    if entries.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let len = entries.len();
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    // Push order is insertion order, so the newest toast draws on top.
    for (index, entry) in entries.iter().enumerate() {
        let toast = entry.toast();
        let anchor = toast.anchor_edge();

        let depth = stack::depth(index, len);
        let scale = stack::depth_scale(depth);
        let offset_y = stack::depth_offset(depth) + stack::slide_offset(anchor, entry.visibility_at(now));

        let capsule = capsule(toast, scale, size.width);

        // Dragging a toast that is already leaving would be meaningless.
        let interactive: Element<'_, Message> = if toast.is_interactive() && entry.is_active() {
            mouse_area(capsule)
                .on_press(Message::DragStarted(toast.id()))
                .interaction(mouse::Interaction::Grab)
                .into()
        } else {
            capsule
        };

        let placed = translate(interactive, Vector::new(0.0, offset_y));

        layers = layers.push(
            Container::new(placed)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(match anchor {
                    Anchor::Top => Vertical::Top,
                    Anchor::Bottom => Vertical::Bottom,
                })
                .padding(edge_padding(anchor)),
        );
    }

    layers.into()
}

/// Renders a single capsule card: optional glyph plus a single-line title.
///
/// Stack depth shrinks the card by scaling its text and padding; iced has no
/// free transform, so the scale is applied to the dimensions instead.
fn capsule(toast: &Toast, scale: f32, layer_width: f32) -> Element<'_, Message> {
    let tint = toast.tint_color();

    let mut row = Row::new()
        .spacing(spacing::SM * scale)
        .align_y(Vertical::Center);

    if let Some(glyph) = toast.glyph_ref() {
        row = row.push(
            Text::new(glyph)
                .size(typography::GLYPH * scale)
                .style(move |theme: &Theme| text::Style {
                    color: Some(tint.unwrap_or(theme.palette().text)),
                }),
        );
    }

    row = row.push(
        Text::new(toast.title())
            .size(typography::BODY * scale)
            .wrapping(text::Wrapping::None)
            .style(move |theme: &Theme| text::Style {
                color: Some(tint.unwrap_or(theme.palette().text)),
            }),
    );

    Container::new(row)
        .max_width(layer_width * sizing::TOAST_WIDTH_FRACTION)
        .padding(Padding {
            top: sizing::CAPSULE_PADDING_Y * scale,
            bottom: sizing::CAPSULE_PADDING_Y * scale,
            left: sizing::CAPSULE_PADDING_X * scale,
            right: sizing::CAPSULE_PADDING_X * scale,
        })
        .style(capsule_style)
        .into()
}

fn edge_padding(anchor: Anchor) -> Padding {
    match anchor {
        Anchor::Top => Padding {
            top: sizing::STACK_EDGE_PADDING,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        },
        Anchor::Bottom => Padding {
            top: 0.0,
            right: 0.0,
            bottom: sizing::STACK_EDGE_PADDING,
            left: 0.0,
        },
    }
}

/// Style function for the capsule container.
fn capsule_style(theme: &Theme) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::CAPSULE,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capsule_style_is_a_pill() {
        let theme = Theme::Dark;
        let style = capsule_style(&theme);

        assert!(style.background.is_some());
        assert_eq!(style.shadow.blur_radius, shadow::CAPSULE.blur_radius);
    }

    #[test]
    fn edge_padding_touches_only_the_anchored_edge() {
        let top = edge_padding(Anchor::Top);
        assert_eq!(top.top, sizing::STACK_EDGE_PADDING);
        assert_eq!(top.bottom, 0.0);

        let bottom = edge_padding(Anchor::Bottom);
        assert_eq!(bottom.bottom, sizing::STACK_EDGE_PADDING);
        assert_eq!(bottom.top, 0.0);
    }
}
