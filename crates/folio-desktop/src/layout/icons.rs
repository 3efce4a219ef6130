//! Desktop icon configuration table

use serde::Serialize;

use super::Breakpoint;
use crate::math::{Size, Vec2};

/// Position expressed as percentages of the usable desktop area
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Percent {
    pub x: f32,
    pub y: f32,
}

impl Percent {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One percentage position per breakpoint tier
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TierPositions {
    pub mobile: Percent,
    pub tablet: Percent,
    pub laptop: Percent,
    pub desktop: Percent,
    pub ultrawide: Percent,
}

impl TierPositions {
    /// Same position on every tier
    pub const fn uniform(p: Percent) -> Self {
        Self {
            mobile: p,
            tablet: p,
            laptop: p,
            desktop: p,
            ultrawide: p,
        }
    }

    /// Position for a tier
    pub fn get(&self, tier: Breakpoint) -> Percent {
        match tier {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Laptop => self.laptop,
            Breakpoint::Desktop => self.desktop,
            Breakpoint::Ultrawide => self.ultrawide,
        }
    }
}

/// Static description of a desktop icon
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconConfig {
    pub id: &'static str,
    pub title: &'static str,
    /// Image asset path
    pub icon: &'static str,
    pub size: Size,
    /// Index into the project table
    pub project_index: usize,
    pub positions: TierPositions,
}

/// A desktop icon placed for the current viewport
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopIcon {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub size: Size,
    pub project_index: usize,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
}

const fn tiers(
    mobile: (f32, f32),
    tablet: (f32, f32),
    laptop: (f32, f32),
    desktop: (f32, f32),
    ultrawide: (f32, f32),
) -> TierPositions {
    TierPositions {
        mobile: Percent::new(mobile.0, mobile.1),
        tablet: Percent::new(tablet.0, tablet.1),
        laptop: Percent::new(laptop.0, laptop.1),
        desktop: Percent::new(desktop.0, desktop.1),
        ultrawide: Percent::new(ultrawide.0, ultrawide.1),
    }
}

/// Icons shown on the projects desktop, one per project
pub static DESKTOP_ICONS: &[IconConfig] = &[
    IconConfig {
        id: "synto",
        title: "Synto",
        icon: "/syntopreview.png",
        size: Size::new(85.0, 85.0),
        project_index: 0,
        positions: tiers((4.0, 4.0), (5.0, 5.0), (6.0, 18.0), (9.0, 20.0), (18.0, 20.0)),
    },
    IconConfig {
        id: "cybercodex",
        title: "CyberCodex.io",
        icon: "/Projects/Cybercodex.io/courses.webp",
        size: Size::new(70.0, 90.0),
        project_index: 1,
        positions: tiers((36.0, 4.0), (35.0, 5.0), (22.0, 46.0), (24.0, 48.0), (30.0, 48.0)),
    },
    IconConfig {
        id: "firstportfolio",
        title: "First Portfolio",
        icon: "/Projects/OldPortfolio/home.webp",
        size: Size::new(75.0, 75.0),
        project_index: 2,
        positions: tiers((68.0, 4.0), (65.0, 5.0), (37.0, 12.0), (38.0, 14.0), (41.0, 14.0)),
    },
    IconConfig {
        id: "fitgear",
        title: "Fitgear",
        icon: "/fitgearpreview.png",
        size: Size::new(95.0, 70.0),
        project_index: 3,
        positions: tiers((4.0, 36.0), (5.0, 35.0), (52.0, 40.0), (52.0, 42.0), (52.0, 42.0)),
    },
    IconConfig {
        id: "serverroom",
        title: "Server Room",
        icon: "/projects/BGCLCV/teenCenterPc.webp",
        size: Size::new(80.0, 95.0),
        project_index: 4,
        positions: tiers((36.0, 36.0), (35.0, 35.0), (70.0, 16.0), (68.0, 18.0), (65.0, 18.0)),
    },
    IconConfig {
        id: "3dpong",
        title: "3D Pong",
        icon: "/transcendancepreview.png",
        size: Size::new(65.0, 65.0),
        project_index: 5,
        positions: tiers((68.0, 36.0), (65.0, 35.0), (8.0, 68.0), (12.0, 70.0), (20.0, 70.0)),
    },
    IconConfig {
        id: "minishell",
        title: "Minishell",
        icon: "/minishellpreview.png",
        size: Size::new(90.0, 75.0),
        project_index: 6,
        positions: tiers((4.0, 68.0), (5.0, 65.0), (30.0, 78.0), (33.0, 80.0), (36.0, 80.0)),
    },
    IconConfig {
        id: "retrosnake",
        title: "Retro Snake",
        icon: "/Projects/Snake/snake.webp",
        size: Size::new(70.0, 85.0),
        project_index: 7,
        positions: tiers((36.0, 68.0), (35.0, 65.0), (80.0, 54.0), (78.0, 56.0), (74.0, 56.0)),
    },
    IconConfig {
        id: "oldportfolio",
        title: "Old Portfolio",
        icon: "/oldportfoliopreview.png",
        size: Size::new(80.0, 80.0),
        project_index: 8,
        positions: tiers((68.0, 68.0), (65.0, 65.0), (58.0, 76.0), (58.0, 78.0), (57.0, 78.0)),
    },
];
