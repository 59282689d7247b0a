use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Preset spring configurations
pub mod presets {
    use super::SpringConfig;

    /// Critically damped: fastest approach with no overshoot (default)
    pub const CRITICAL: SpringConfig = SpringConfig {
        stiffness: 100.0,
        damping_ratio: 1.0,
        mass: 1.0,
        rest_displacement: 0.01,
        rest_speed: 2.0,
    };

    /// Bouncy follow (damping 10, stiffness 100, mass 1)
    pub const WOBBLY: SpringConfig = SpringConfig {
        stiffness: 100.0,
        damping_ratio: 0.5,
        mass: 1.0,
        rest_displacement: 0.01,
        rest_speed: 2.0,
    };

    /// Heavy, slightly over-damped trailing
    pub const SLUGGISH: SpringConfig = SpringConfig {
        stiffness: 40.0,
        damping_ratio: 1.2,
        mass: 1.0,
        rest_displacement: 0.01,
        rest_speed: 2.0,
    };

    /// Look up a preset by name
    pub fn by_name(name: &str) -> Option<SpringConfig> {
        match name {
            "critical" => Some(CRITICAL),
            "wobbly" => Some(WOBBLY),
            "sluggish" => Some(SLUGGISH),
            _ => None,
        }
    }
}

/// Tolerance for treating a damping ratio as exactly critical
const CRITICAL_EPSILON: f32 = 1e-4;

/// Parameters of a damped second-order spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Hooke constant (force per unit displacement)
    pub stiffness: f32,
    /// 1.0 = critically damped, < 1.0 = under-damped, > 1.0 = over-damped
    pub damping_ratio: f32,
    pub mass: f32,
    /// Below this distance to the target (and `rest_speed`) the axis settles
    pub rest_displacement: f32,
    /// Below this speed (and `rest_displacement`) the axis settles
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        presets::CRITICAL
    }
}

impl SpringConfig {
    /// Undamped angular frequency (rad/s)
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Check the parameters describe a spring that converges
    pub fn validate(&self) -> Result<(), String> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.stiffness) {
            return Err(format!("stiffness must be positive, got {}", self.stiffness));
        }
        if !positive(self.mass) {
            return Err(format!("mass must be positive, got {}", self.mass));
        }
        if !positive(self.damping_ratio) {
            return Err(format!(
                "damping_ratio must be positive, got {}",
                self.damping_ratio
            ));
        }
        if !(self.rest_displacement.is_finite() && self.rest_displacement >= 0.0) {
            return Err(format!(
                "rest_displacement must be non-negative, got {}",
                self.rest_displacement
            ));
        }
        if !(self.rest_speed.is_finite() && self.rest_speed >= 0.0) {
            return Err(format!(
                "rest_speed must be non-negative, got {}",
                self.rest_speed
            ));
        }
        Ok(())
    }
}

/// One damped axis: a value and its velocity
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringAxis {
    pub value: f32,
    pub velocity: f32,
}

impl SpringAxis {
    pub fn at(value: f32) -> Self {
        SpringAxis {
            value,
            velocity: 0.0,
        }
    }

    /// Is the axis resting exactly on `target`?
    pub fn is_settled(&self, target: f32) -> bool {
        self.value == target && self.velocity == 0.0
    }

    /// Advance toward `target` by `dt` seconds, holding the target fixed over the step.
    ///
    /// Uses the closed-form solution of the damped oscillator, so the result does not
    /// depend on how the elapsed time is split into frames.
    pub fn step(&mut self, target: f32, dt: f32, config: &SpringConfig) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }

        let omega = config.natural_frequency();
        let zeta = config.damping_ratio;
        let d0 = self.value - target;
        let v0 = self.velocity;

        let (d, v) = if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            // x(t) = (d0 + (v0 + w*d0) t) e^{-wt}
            let decay = (-omega * dt).exp();
            let b = v0 + omega * d0;
            ((d0 + b * dt) * decay, (v0 - omega * b * dt) * decay)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * dt).exp();
            let (sin, cos) = (omega_d * dt).sin_cos();
            let d = decay * (d0 * cos + (v0 + zeta * omega * d0) / omega_d * sin);
            let v = decay
                * (v0 * cos - (omega * omega * d0 + zeta * omega * v0) / omega_d * sin);
            (d, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * d0) / (r2 - r1);
            let c1 = d0 - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        if d.abs() < config.rest_displacement && v.abs() < config.rest_speed {
            self.value = target;
            self.velocity = 0.0;
        } else {
            self.value = target + d;
            self.velocity = v;
        }
    }
}

/// A 2D position that chases a target with an independent spring per axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringFollower {
    x: SpringAxis,
    y: SpringAxis,
}

impl SpringFollower {
    pub fn at(position: Vec2) -> Self {
        SpringFollower {
            x: SpringAxis::at(position.x),
            y: SpringAxis::at(position.y),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value, self.y.value)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.velocity, self.y.velocity)
    }

    pub fn step(&mut self, target: Vec2, dt: f32, config: &SpringConfig) {
        self.x.step(target.x, dt, config);
        self.y.step(target.y, dt, config);
    }

    pub fn is_settled(&self, target: Vec2) -> bool {
        self.x.is_settled(target.x) && self.y.is_settled(target.y)
    }
}
