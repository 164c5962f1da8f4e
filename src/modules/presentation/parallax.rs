use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::motion::{transform, SmoothedValue, Smoothing};
use super::scroll::{ScrollOffset, SectionBounds, Viewport};
use crate::modules::content::domain::sections::Section;

/// One animated property on one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    HeroY,
    HeroScale,
    HeroOpacity,
    AboutY,
    SkillsY,
    ProjectsX,
    BlogX,
}

const FULL: [f64; 2] = [0.0, 1.0];
const DESKTOP_WINDOW: [f64; 2] = [0.1, 0.9];

impl Channel {
    pub const ALL: [Channel; 7] = [
        Channel::HeroY,
        Channel::HeroScale,
        Channel::HeroOpacity,
        Channel::AboutY,
        Channel::SkillsY,
        Channel::ProjectsX,
        Channel::BlogX,
    ];

    pub fn section(self) -> Section {
        match self {
            Channel::HeroY | Channel::HeroScale | Channel::HeroOpacity => Section::Hero,
            Channel::AboutY => Section::About,
            Channel::SkillsY => Section::Skills,
            Channel::ProjectsX => Section::Projects,
            Channel::BlogX => Section::Blog,
        }
    }

    pub fn offset(self) -> ScrollOffset {
        match self.section() {
            Section::Hero => ScrollOffset::StartStartToEndStart,
            _ => ScrollOffset::StartEndToEndStart,
        }
    }

    /// Progress window the channel animates over. Mobile windows start
    /// earlier and finish sooner.
    pub fn input_range(self, is_mobile: bool) -> [f64; 2] {
        match (self, is_mobile) {
            (Channel::HeroY | Channel::HeroScale | Channel::HeroOpacity, _) => FULL,
            (Channel::AboutY | Channel::SkillsY, true) => [0.0, 0.7],
            (Channel::ProjectsX | Channel::BlogX, true) => [0.05, 0.7],
            (_, false) => DESKTOP_WINDOW,
        }
    }

    pub fn output_range(self) -> [f64; 2] {
        match self {
            Channel::HeroY => [0.0, 100.0],
            Channel::HeroScale => [1.0, 1.15],
            Channel::HeroOpacity => [1.0, 0.7],
            Channel::AboutY | Channel::SkillsY => [30.0, -30.0],
            Channel::ProjectsX => [-50.0, 0.0],
            Channel::BlogX => [50.0, 0.0],
        }
    }

    /// Unsmoothed value for the current scroll position. A section without
    /// measured bounds sits at the start of its output range.
    pub fn target(self, viewport: &Viewport, layout: &SectionLayout) -> f64 {
        let progress = layout
            .get(self.section())
            .map(|bounds| self.offset().progress(bounds, viewport))
            .unwrap_or(0.0);

        transform(
            progress,
            self.input_range(viewport.is_mobile()),
            self.output_range(),
        )
    }
}

/// Measured section positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    bounds: HashMap<Section, SectionBounds>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section: Section, bounds: SectionBounds) -> Self {
        self.bounds.insert(section, bounds);
        self
    }

    pub fn set(&mut self, section: Section, bounds: SectionBounds) {
        self.bounds.insert(section, bounds);
    }

    pub fn get(&self, section: Section) -> Option<SectionBounds> {
        self.bounds.get(&section).copied()
    }
}

/// Smoothed offsets for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallaxFrame {
    pub hero_y: f64,
    pub hero_scale: f64,
    pub hero_opacity: f64,
    pub about_y: f64,
    pub skills_y: f64,
    pub projects_x: f64,
    pub blog_x: f64,
}

impl Default for ParallaxFrame {
    /// Every channel at the start of its output range.
    fn default() -> Self {
        Self::from_fn(|channel| channel.output_range()[0])
    }
}

impl ParallaxFrame {
    fn from_fn(mut value: impl FnMut(Channel) -> f64) -> Self {
        Self {
            hero_y: value(Channel::HeroY),
            hero_scale: value(Channel::HeroScale),
            hero_opacity: value(Channel::HeroOpacity),
            about_y: value(Channel::AboutY),
            skills_y: value(Channel::SkillsY),
            projects_x: value(Channel::ProjectsX),
            blog_x: value(Channel::BlogX),
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::HeroY => self.hero_y,
            Channel::HeroScale => self.hero_scale,
            Channel::HeroOpacity => self.hero_opacity,
            Channel::AboutY => self.about_y,
            Channel::SkillsY => self.skills_y,
            Channel::ProjectsX => self.projects_x,
            Channel::BlogX => self.blog_x,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParallaxState {
    channels: HashMap<Channel, SmoothedValue>,
}

impl ParallaxState {
    /// Channels start at rest on their current targets.
    pub fn new(smoothing: Arc<dyn Smoothing>, viewport: &Viewport, layout: &SectionLayout) -> Self {
        let channels = Channel::ALL
            .into_iter()
            .map(|channel| {
                let initial = channel.target(viewport, layout);
                (channel, SmoothedValue::new(initial, Arc::clone(&smoothing)))
            })
            .collect();

        Self { channels }
    }

    /// Retargets every channel from the scroll position and advances the
    /// smoothing by `dt`.
    pub fn tick(&mut self, viewport: &Viewport, layout: &SectionLayout, dt: Duration) -> ParallaxFrame {
        for (channel, value) in self.channels.iter_mut() {
            value.set_target(channel.target(viewport, layout));
            value.tick(dt);
        }
        self.frame()
    }

    pub fn frame(&self) -> ParallaxFrame {
        ParallaxFrame::from_fn(|channel| {
            self.channels
                .get(&channel)
                .map(SmoothedValue::value)
                .unwrap_or_else(|| channel.output_range()[0])
        })
    }

    pub fn is_at_rest(&self) -> bool {
        self.channels.values().all(SmoothedValue::is_at_rest)
    }
}
