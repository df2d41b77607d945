/// Template overlay policy for one floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorRules {
    pub boss_room: bool,
    pub treasure_chance: f64,
    pub max_template_rooms: usize,
}

impl FloorRules {
    pub fn for_floor(floor: u32) -> Self {
        let boss_room = floor > 0 && floor % 5 == 0;
        let treasure_chance =
            if floor < 3 { 0.0 } else { (0.3 + 0.05 * f64::from(floor - 3)).min(0.7) };
        let max_template_rooms = (floor as usize / 3 + 1).min(3);
        Self { boss_room, treasure_chance, max_template_rooms }
    }
}
