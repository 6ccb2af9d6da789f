// SPDX-License-Identifier: MPL-2.0
//! Demo application for the toast overlay.
//!
//! Two buttons: one shows a toast with the configured defaults, the other
//! flips the anchor between the top and bottom screen edges. Run with
//! `--config <path>` to load presentation defaults from a specific
//! `settings.toml`.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Text};
use iced::{window, Element, Length, Size, Subscription, Task};
use iced_toasts::{self as toasts, Anchor, Manager, Toast, ToastDuration};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap();

    let config = match &config_path {
        Some(path) => toasts::config::load_from_path(path),
        None => toasts::config::load(),
    }
    .unwrap_or_else(|err| {
        eprintln!("Failed to load settings: {err}");
        toasts::config::Config::default()
    });

    let boot = move || (Demo::new(config.clone()), Task::none());

    iced::application(boot, Demo::update, Demo::view)
        .title("Toasts")
        .window(window::Settings {
            size: Size::new(480.0, 640.0),
            ..window::Settings::default()
        })
        .subscription(Demo::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    ShowPressed,
    FlipAnchor,
    Toast(toasts::Message),
}

struct Demo {
    toasts: Manager,
    anchor: Anchor,
    duration: ToastDuration,
}

impl Demo {
    fn new(config: toasts::config::Config) -> Self {
        Self {
            toasts: Manager::new(),
            anchor: config.anchor_or_default(),
            duration: config.duration_or_default(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPressed => {
                self.toasts.show(
                    Toast::new("Deleted")
                        .glyph("🗑")
                        .duration(self.duration)
                        .anchor(self.anchor),
                );
            }
            Message::FlipAnchor => {
                self.anchor = self.anchor.flipped();
            }
            Message::Toast(toast_message) => {
                self.toasts.update(toast_message);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let anchor_label = match self.anchor {
            Anchor::Top => "Anchor: top",
            Anchor::Bottom => "Anchor: bottom",
        };

        let buttons = Column::new()
            .spacing(20)
            .push(button(Text::new("Press Button")).on_press(Message::ShowPressed))
            .push(button(Text::new(anchor_label)).on_press(Message::FlipAnchor));

        let content: Element<'_, Message> = Container::new(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();

        toasts::host(content, &self.toasts, Message::Toast)
    }

    fn subscription(&self) -> Subscription<Message> {
        toasts::subscription(&self.toasts).map(Message::Toast)
    }
}
