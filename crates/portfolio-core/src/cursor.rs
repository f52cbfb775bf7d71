//! Custom cursor: a dot pinned to the pointer and a ring that eases after it.

use glam::Vec2;

pub const FOLLOWER_EASE: f32 = 0.15; // fraction of the remaining gap closed per frame
pub const DOT_HALF_EXTENT_PX: f32 = 4.0;
pub const FOLLOWER_HALF_EXTENT_PX: f32 = 18.0;

/// Elements that grow the follower ring while hovered.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, .skill-tag, .project-card, .cert-card, .award-item, .detail-card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowerStyle {
    pub size_px: u32,
    pub border_color: &'static str,
}

pub const FOLLOWER_IDLE: FollowerStyle = FollowerStyle {
    size_px: 36,
    border_color: "rgba(108, 99, 255, 0.5)",
};

pub const FOLLOWER_HOVER: FollowerStyle = FollowerStyle {
    size_px: 50,
    border_color: "rgba(0, 212, 255, 0.6)",
};

#[inline]
pub fn follower_style(hovering: bool) -> FollowerStyle {
    if hovering {
        FOLLOWER_HOVER
    } else {
        FOLLOWER_IDLE
    }
}

#[derive(Clone, Debug, Default)]
pub struct CursorFollower {
    target: Vec2,
    follower: Vec2,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn follower(&self) -> Vec2 {
        self.follower
    }

    /// Close a fixed fraction of the gap between follower and target.
    pub fn step(&mut self) {
        self.follower += (self.target - self.follower) * FOLLOWER_EASE;
    }

    pub fn dot_transform(&self) -> String {
        translate(self.target, DOT_HALF_EXTENT_PX)
    }

    pub fn follower_transform(&self) -> String {
        translate(self.follower, FOLLOWER_HALF_EXTENT_PX)
    }
}

fn translate(p: Vec2, half: f32) -> String {
    format!("translate({}px, {}px)", p.x - half, p.y - half)
}
