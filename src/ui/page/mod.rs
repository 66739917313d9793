// SPDX-License-Identifier: MPL-2.0
//! The brochure page component: state, update logic, and rendering.
//!
//! Owns everything that reacts to scrolling: section reveals, the
//! statistics counters, gallery image loading, the animated scroll, and
//! the contact form.

pub mod contact_form;
pub mod layout;

pub use contact_form::{ContactForm, Field, SubmitOutcome};

use std::collections::HashSet;
use std::time::{Duration, Instant};

use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{button, operation, text_input, Column, Container, Id, Row, Scrollable, Text};
use iced::{alignment, Element, Length, Rectangle, Task};

use crate::config::{defaults, Config};
use crate::content::{self, ImageSpec, SectionBody, SectionId, Stat};
use crate::error::Error;
use crate::format;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Counter, LazyImage, ScrollAnimation, ScrollState, Throttle, Typewriter};
use crate::ui::styles;
use layout::SectionLayout;

/// Identifier used for the page scrollable widget.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Messages emitted by page widgets.
#[derive(Debug, Clone)]
pub enum Message {
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    FormInput(Field, String),
    SubmitForm,
    ImageLoaded {
        index: usize,
        result: Result<Handle, Error>,
    },
}

/// Effects the page asks the application to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The contact form validated and was cleared.
    FormAccepted,
    /// The contact form had invalid fields.
    FormRejected,
}

/// State of the page component.
pub struct State {
    page: content::Page,
    layouts: Vec<SectionLayout>,
    stats: Vec<Stat>,
    counters: Vec<Counter>,
    gallery: Vec<ImageSpec>,
    images: Vec<LazyImage>,
    scroll: ScrollState,
    animation: Option<ScrollAnimation>,
    throttle: Throttle,
    revealed: HashSet<SectionId>,
    typewriter: Typewriter,
    form: ContactForm,
    viewport_height: f32,
    smooth_scroll: Duration,
}

impl State {
    /// Builds the page state and starts the hero typewriter at `now`.
    pub fn new(config: &Config, now: Instant) -> Self {
        let page = content::page();
        let layouts = layout::section_layouts(&page);

        let stats: Vec<Stat> = page
            .sections
            .iter()
            .find_map(|section| match &section.body {
                SectionBody::Stats(stats) => Some(stats.clone()),
                _ => None,
            })
            .unwrap_or_default();
        let counters = stats
            .iter()
            .map(|stat| {
                let duration_ms = stat
                    .duration_ms
                    .unwrap_or(defaults::DEFAULT_COUNTER_DURATION_MS);
                Counter::new(stat.target, Duration::from_millis(duration_ms))
            })
            .collect();

        let gallery: Vec<ImageSpec> = page
            .sections
            .iter()
            .find_map(|section| match &section.body {
                SectionBody::Gallery(images) => Some(images.clone()),
                _ => None,
            })
            .unwrap_or_default();
        let images = vec![LazyImage::default(); gallery.len()];

        let typing_speed_ms = config
            .motion
            .typing_speed_ms
            .unwrap_or(defaults::DEFAULT_TYPING_SPEED_MS);
        let mut typewriter =
            Typewriter::new(page.hero.tagline, Duration::from_millis(typing_speed_ms));
        typewriter.start(now);

        Self {
            page,
            layouts,
            stats,
            counters,
            gallery,
            images,
            scroll: ScrollState::default(),
            animation: None,
            throttle: Throttle::new(Duration::from_millis(defaults::SCROLL_THROTTLE_MS)),
            revealed: HashSet::new(),
            typewriter,
            form: ContactForm::default(),
            viewport_height: 0.0,
            smooth_scroll: Duration::from_millis(
                config
                    .motion
                    .smooth_scroll_ms
                    .unwrap_or(defaults::DEFAULT_SMOOTH_SCROLL_MS),
            ),
        }
    }

    /// Processes a page message.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::ViewportChanged { bounds, offset } => {
                self.viewport_height = bounds.height;
                self.scroll.record(offset.y);
                // Reveal checks are throttled; the recorded offset is not.
                if self.throttle.ready(now) {
                    (Effect::None, self.sync_visibility(now))
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::FormInput(field, value) => {
                self.form.input(field, value);
                (Effect::None, Task::none())
            }
            Message::SubmitForm => match self.form.submit() {
                SubmitOutcome::Accepted => (Effect::FormAccepted, Task::none()),
                SubmitOutcome::Rejected => (Effect::FormRejected, Task::none()),
            },
            Message::ImageLoaded { index, result } => {
                let handle = match result {
                    Ok(handle) => Some(handle),
                    Err(error) => {
                        if let Some(spec) = self.gallery.get(index) {
                            eprintln!(
                                "Warning: could not load gallery image '{}': {error}",
                                spec.path
                            );
                        }
                        None
                    }
                };
                if let Some(image) = self.images.get_mut(index) {
                    image.resolve(handle);
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Advances time-driven state by one animation tick.
    pub fn tick(&mut self, now: Instant) -> Task<Message> {
        for counter in &mut self.counters {
            counter.settle(now);
        }

        let mut tasks = vec![self.sync_visibility(now)];

        if let Some(animation) = self.animation {
            let offset = animation.offset_at(now);
            if animation.is_finished(now) {
                self.animation = None;
            }
            self.scroll.record(offset);
            tasks.push(operation::scroll_to(
                Id::new(SCROLLABLE_ID),
                AbsoluteOffset { x: 0.0, y: offset },
            ));
        }

        Task::batch(tasks)
    }

    /// Starts an animated scroll that puts `id` at the top of the
    /// viewport.
    pub fn scroll_to_section(&mut self, id: SectionId, now: Instant) {
        if let Some(target) = layout::scroll_target(&self.layouts, id) {
            self.animation = Some(ScrollAnimation::new(
                self.scroll.offset(),
                target,
                now,
                self.smooth_scroll,
            ));
        }
    }

    /// Starts an animated scroll back to the top of the page.
    pub fn scroll_to_top(&mut self, now: Instant) {
        self.animation = Some(ScrollAnimation::new(
            self.scroll.offset(),
            0.0,
            now,
            self.smooth_scroll,
        ));
    }

    /// Re-runs the visibility checks, bypassing the scroll throttle.
    /// Used after window resizes and at startup.
    pub fn refresh(&mut self, viewport_height: f32, now: Instant) -> Task<Message> {
        self.viewport_height = viewport_height;
        self.sync_visibility(now)
    }

    /// Whether any page animation still needs ticks at `now`.
    pub fn needs_tick(&self, now: Instant) -> bool {
        self.animation.is_some()
            || self.typewriter.is_animating_at(now)
            || self.counters.iter().any(Counter::is_running)
    }

    /// The site name shown in the navbar.
    pub fn brand(&self) -> &'static str {
        self.page.hero.heading
    }

    pub fn header_elevated(&self) -> bool {
        self.scroll.header_elevated()
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll.show_scroll_top()
    }

    /// Applies the scroll-linked triggers for the current offset:
    /// section reveals, counter starts, and gallery image loads.
    fn sync_visibility(&mut self, now: Instant) -> Task<Message> {
        let offset = self.scroll.offset();
        let viewport_height = self.viewport_height;
        if viewport_height <= 0.0 {
            return Task::none();
        }

        let mut tasks = Vec::new();
        let layouts = self.layouts.clone();
        for section in layouts {
            if layout::is_revealed(section, offset, viewport_height) {
                self.revealed.insert(section.id);
            }
            match section.id {
                SectionId::Stats
                    if layout::triggers_counters(section, offset, viewport_height) =>
                {
                    for counter in &mut self.counters {
                        counter.trigger(now);
                    }
                }
                SectionId::Gallery
                    if layout::intersects_viewport(section, offset, viewport_height) =>
                {
                    for (index, image) in self.images.iter_mut().enumerate() {
                        if image.request() {
                            let path = self.gallery[index].path;
                            tasks.push(Task::perform(load_image(path), move |result| {
                                Message::ImageLoaded { index, result }
                            }));
                        }
                    }
                }
                _ => {}
            }
        }

        Task::batch(tasks)
    }

    /// Renders the scrollable page.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let mut column = Column::new().push(self.view_hero(now));

        for section in &self.page.sections {
            column = column.push(self.view_section(section.id, &section.body, now));
        }

        Scrollable::new(column.width(Length::Fill))
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::ViewportChanged {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
            })
            .into()
    }

    fn view_hero(&self, now: Instant) -> Element<'_, Message> {
        let heading = Text::new(self.page.hero.heading).size(typography::TITLE_LG);
        let tagline = Text::new(self.typewriter.visible_at(now)).size(typography::TITLE_MD);

        Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(heading)
                .push(tagline),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    }

    fn view_section(
        &self,
        id: SectionId,
        body: &SectionBody,
        now: Instant,
    ) -> Element<'_, Message> {
        let content: Element<'_, Message> = match body {
            SectionBody::Prose(prose) => self.view_prose(id, prose),
            SectionBody::Stats(_) => self.view_stats(now),
            SectionBody::Gallery(_) => self.view_gallery(),
            SectionBody::Contact => self.view_contact(),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(layout::section_height(body)))
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::revealable(self.revealed.contains(&id)))
            .into()
    }

    fn view_prose(&self, id: SectionId, prose: &'static str) -> Element<'_, Message> {
        Column::new()
            .spacing(spacing::LG)
            .max_width(640.0)
            .push(Text::new(id.title()).size(typography::TITLE_MD))
            .push(Text::new(prose).size(typography::BODY_LG))
            .into()
    }

    fn view_stats(&self, now: Instant) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XXL);

        for (stat, counter) in self.stats.iter().zip(&self.counters) {
            let value = format::format_number(counter.value_at(now));
            row = row.push(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .push(Text::new(value).size(typography::TITLE_LG))
                    .push(Text::new(stat.label).size(typography::BODY)),
            );
        }

        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(SectionId::Stats.title()).size(typography::TITLE_MD))
            .push(row)
            .into()
    }

    fn view_gallery(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::LG);

        for (spec, image) in self.gallery.iter().zip(&self.images) {
            let slot: Element<'_, Message> = match image.handle() {
                Some(handle) => Image::new(handle.clone())
                    .height(Length::Fixed(sizing::GALLERY_IMAGE_HEIGHT))
                    .into(),
                None => Container::new(Text::new(spec.caption).size(typography::CAPTION))
                    .width(Length::Fixed(sizing::GALLERY_IMAGE_HEIGHT * 1.5))
                    .height(Length::Fixed(sizing::GALLERY_IMAGE_HEIGHT))
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center)
                    .style(styles::container::image_placeholder)
                    .into(),
            };

            row = row.push(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .push(slot)
                    .push(Text::new(spec.caption).size(typography::CAPTION)),
            );
        }

        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(SectionId::Gallery.title()).size(typography::TITLE_MD))
            .push(row)
            .into()
    }

    fn view_contact(&self) -> Element<'_, Message> {
        let input_field = |label: &'static str, field: Field| {
            text_input(label, self.form.value(field))
                .on_input(move |value| Message::FormInput(field, value))
                .padding(spacing::SM)
                .size(typography::BODY_LG)
                .style(styles::input::field(self.form.has_error(field)))
        };

        let submit = button(Text::new("Send message").size(typography::BODY_LG))
            .on_press(Message::SubmitForm)
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary);

        Column::new()
            .spacing(spacing::LG)
            .max_width(480.0)
            .push(Text::new(SectionId::Contact.title()).size(typography::TITLE_MD))
            .push(input_field("Name", Field::Name))
            .push(input_field("Email", Field::Email))
            .push(input_field("Message", Field::Message))
            .push(submit)
            .into()
    }
}

/// Reads and decodes a gallery image off the UI thread. A failed slot
/// keeps its placeholder.
async fn load_image(path: &'static str) -> Result<Handle, Error> {
    let bytes = tokio::fs::read(path).await?;
    let image = image_rs::load_from_memory(&bytes)?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(&Config::default(), Instant::now())
    }

    fn scrolled(offset: f32) -> Message {
        Message::ViewportChanged {
            bounds: Rectangle::new(iced::Point::ORIGIN, iced::Size::new(1_024.0, 768.0)),
            offset: AbsoluteOffset { x: 0.0, y: offset },
        }
    }

    #[test]
    fn scrolling_reveals_sections_that_entered_the_viewport() {
        let mut state = state();
        let now = Instant::now();

        let (_, _) = state.handle_message(scrolled(0.0), now);
        assert!(state.revealed.contains(&SectionId::About));
        assert!(!state.revealed.contains(&SectionId::Contact));

        // A scrollable stops at content height minus viewport height, so
        // that is the offset it reports when scrolled all the way down.
        let bottom = state.layouts.last().map(|l| l.top + l.height).unwrap_or(0.0);
        let max_offset = bottom - 768.0;
        let (_, _) = state.handle_message(scrolled(max_offset), now + Duration::from_millis(200));
        assert!(state.revealed.contains(&SectionId::Contact));
    }

    #[test]
    fn reveals_are_not_undone_by_scrolling_away() {
        let mut state = state();
        let now = Instant::now();

        state.handle_message(scrolled(2_000.0), now);
        let revealed_before = state.revealed.clone();
        state.handle_message(scrolled(0.0), now + Duration::from_millis(200));

        assert!(state.revealed.is_superset(&revealed_before));
    }

    #[test]
    fn counters_start_once_the_stats_section_is_half_visible() {
        let mut state = state();
        let now = Instant::now();
        let stats = state
            .layouts
            .iter()
            .copied()
            .find(|l| l.id == SectionId::Stats)
            .unwrap();

        let offset = stats.top - 768.0 + stats.height * 0.5;
        state.handle_message(scrolled(offset), now);

        assert!(state.counters.iter().all(Counter::is_running));
        assert!(state.needs_tick(now));
    }

    #[test]
    fn rapid_scroll_events_are_throttled() {
        let mut state = state();
        let now = Instant::now();

        state.handle_message(scrolled(10.0), now);
        // Inside the throttle window: the offset updates, reveals do not.
        let far = state.layouts.last().map(|l| l.top).unwrap_or(0.0);
        state.handle_message(scrolled(far), now + Duration::from_millis(10));

        assert_eq!(state.scroll.offset(), far);
        assert!(!state.revealed.contains(&SectionId::Contact));
    }

    #[test]
    fn navigation_animates_toward_the_section_top() {
        let mut state = state();
        let now = Instant::now();
        state.refresh(768.0, now);

        state.scroll_to_section(SectionId::Contact, now);
        let animation = state.animation.unwrap();
        let target = layout::scroll_target(&state.layouts, SectionId::Contact).unwrap();

        assert_eq!(animation.target(), target);
        assert!(state.needs_tick(now));

        state.tick(now + Duration::from_millis(400));
        assert!(state.animation.is_none());
        assert_eq!(state.scroll.offset(), target);
    }

    #[test]
    fn form_submit_reports_an_effect() {
        let mut state = state();
        let now = Instant::now();

        let (effect, _) = state.handle_message(Message::SubmitForm, now);
        assert_eq!(effect, Effect::FormRejected);

        state.handle_message(Message::FormInput(Field::Name, "Ada".into()), now);
        state.handle_message(Message::FormInput(Field::Email, "ada@example.com".into()), now);
        state.handle_message(Message::FormInput(Field::Message, "Hello".into()), now);
        let (effect, _) = state.handle_message(Message::SubmitForm, now);
        assert_eq!(effect, Effect::FormAccepted);
    }

    #[test]
    fn failed_image_loads_keep_the_placeholder() {
        let mut state = state();
        let now = Instant::now();
        for image in &mut state.images {
            image.request();
        }

        let result = Err(Error::Io("no such file".to_string()));
        state.handle_message(Message::ImageLoaded { index: 0, result }, now);
        assert!(state.images[0].handle().is_none());
    }
}
