/// Combat numbers owned by one entity. `0 <= health <= max_health` holds
/// after every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stats {
    health: i32,
    max_health: i32,
    attack: i32,
    defense: i32,
}

impl Stats {
    pub fn new(max_health: i32, attack: i32, defense: i32) -> Self {
        debug_assert!(max_health > 0, "max health must be positive");
        Self { health: max_health, max_health, attack, defense }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    /// Applies `amount` reduced by defense, never less than 1, and returns
    /// the damage dealt.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = (amount - self.defense).max(1);
        self.health = (self.health - actual).max(0);
        self.debug_check();
        actual
    }

    /// Restores up to `amount` health and returns how much was restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.debug_check();
        self.health - before
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn health_percentage(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    pub fn raise_attack(&mut self, amount: i32) {
        self.attack += amount;
    }

    pub fn raise_defense(&mut self, amount: i32) {
        self.defense += amount;
    }

    /// Raises the cap and heals by the same amount.
    pub fn raise_max_health(&mut self, amount: i32) {
        self.max_health = (self.max_health + amount).max(1);
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.debug_check();
    }

    fn debug_check(&self) {
        debug_assert!(
            (0..=self.max_health).contains(&self.health),
            "health {} escaped [0, {}]",
            self.health,
            self.max_health
        );
    }
}
