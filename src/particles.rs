use std::collections::VecDeque;

/// Particles rendered before the spawn timer starts.
pub const INITIAL_PARTICLES: usize = 20;
pub const SPAWN_INTERVAL_MS: u64 = 300;
pub const LIFETIME_MS: u64 = 8000;
/// Spawn ticks a particle stays on screen before it is retired.
pub const LIFETIME_TICKS: u64 = LIFETIME_MS / SPAWN_INTERVAL_MS;
/// Most particles ever live at once: the initial batch plus everything spawned before it expires.
pub const MAX_LIVE: usize = INITIAL_PARTICLES + LIFETIME_TICKS as usize - 1;

// Irrational steps for an additive low-discrepancy sequence.
const LEFT_STEP: f64 = 0.618_033_988_749_895;
const TOP_STEP: f64 = 0.754_877_666_246_693;
const DELAY_STEP: f64 = 0.414_213_562_373_095;
const DURATION_STEP: f64 = 0.732_050_807_568_877;
const OPACITY_STEP: f64 = 0.236_067_977_499_790;

fn frac(x: f64) -> f64 {
    x - x.floor()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: u64,
    /// Spawn tick the particle appeared on.
    pub born: u64,
    /// Horizontal position, percent of the banner width.
    pub left: f64,
    /// Vertical position, percent of the banner height.
    pub top: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub opacity: f64,
}

impl Particle {
    /// The `n`th particle. Same `n`, same particle, so server and browser agree.
    pub fn nth(n: u64, born: u64) -> Self {
        let x = n as f64 + 1.0;
        Self {
            id: n,
            born,
            left: frac(x * LEFT_STEP) * 100.0,
            top: frac(x * TOP_STEP) * 100.0,
            delay_s: frac(x * DELAY_STEP) * 6.0,
            duration_s: 4.0 + frac(x * DURATION_STEP) * 4.0,
            opacity: 0.3 + frac(x * OPACITY_STEP) * 0.5,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2}",
            self.left, self.top, self.delay_s, self.duration_s, self.opacity
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    next: u64,
    tick: u64,
    live: VecDeque<Particle>,
}

impl Default for ParticleField {
    fn default() -> Self {
        let mut field = Self {
            next: 0,
            tick: 0,
            live: VecDeque::with_capacity(MAX_LIVE),
        };
        for _ in 0..INITIAL_PARTICLES {
            field.push();
        }
        field
    }
}

impl ParticleField {
    /// Advances one tick: retires particles that have lived `LIFETIME_TICKS`, then adds one.
    pub fn spawn(&mut self) {
        self.tick += 1;
        while self
            .live
            .front()
            .is_some_and(|p| self.tick - p.born >= LIFETIME_TICKS)
        {
            self.live.pop_front();
        }
        self.push();
    }

    fn push(&mut self) {
        self.live.push_back(Particle::nth(self.next, self.tick));
        self.next += 1;
    }

    pub fn contains(&self, id: u64) -> bool {
        self.live.iter().any(|p| p.id == id)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_deterministic() {
        assert_eq!(Particle::nth(7, 0), Particle::nth(7, 0));
        assert_ne!(Particle::nth(7, 0), Particle::nth(8, 0));
        assert_eq!(ParticleField::default(), ParticleField::default());
    }

    #[test]
    fn test_particle_ranges() {
        for n in 0..500 {
            let p = Particle::nth(n, 0);
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..6.0).contains(&p.delay_s));
            assert!((4.0..8.0).contains(&p.duration_s));
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn test_field_is_bounded() {
        let mut field = ParticleField::default();
        assert_eq!(field.len(), INITIAL_PARTICLES);
        let mut most = field.len();
        for _ in 0..200 {
            field.spawn();
            most = most.max(field.len());
        }
        assert_eq!(most, MAX_LIVE);
        // steady state: one particle per tick of lifetime
        assert_eq!(field.len(), LIFETIME_TICKS as usize);
        let first = field.particles().next().expect("field is not empty");
        assert_eq!(first.id, (INITIAL_PARTICLES + 200) as u64 - LIFETIME_TICKS);
    }

    #[test]
    fn test_particles_live_about_eight_seconds() {
        let mut field = ParticleField::default();
        for _ in 0..100 {
            field.spawn();
        }
        let newest = field.particles().last().expect("field is not empty").id;
        let mut ticks = 0;
        while field.contains(newest) {
            field.spawn();
            ticks += 1;
        }
        assert_eq!(ticks, LIFETIME_TICKS);
        let lived_ms = ticks * SPAWN_INTERVAL_MS;
        assert!(lived_ms <= LIFETIME_MS && lived_ms > LIFETIME_MS - SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_initial_batch_expires_together() {
        let mut field = ParticleField::default();
        for _ in 1..LIFETIME_TICKS {
            field.spawn();
        }
        assert!(field.contains(0));
        field.spawn();
        assert!((0..INITIAL_PARTICLES as u64).all(|id| !field.contains(id)));
        assert_eq!(field.len(), LIFETIME_TICKS as usize);
    }

    #[test]
    fn test_style() {
        let p = Particle {
            id: 0,
            born: 0,
            left: 12.5,
            top: 50.0,
            delay_s: 1.0,
            duration_s: 4.5,
            opacity: 0.5,
        };
        assert_eq!(
            p.style(),
            "left: 12.50%; top: 50.00%; animation-delay: 1.00s; animation-duration: 4.50s; opacity: 0.50"
        );
    }
}
