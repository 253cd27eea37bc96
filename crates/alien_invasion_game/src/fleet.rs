//! Fleet layout and the bounce-and-drop movement rule.
//!
//! Aliens are spaced one alien apart in both directions, with a one-alien
//! margin on the left and right, three alien heights plus the ship kept free
//! at the bottom.

use crate::alien::Alien;
use crate::geometry::Rect;
use crate::settings::Settings;

/// How many aliens fit in one row.
pub fn number_aliens_x(screen_width: i32, alien_width: i32) -> usize {
    if alien_width <= 0 {
        return 0;
    }
    let available_space_x = screen_width - 2 * alien_width;
    (available_space_x / (2 * alien_width)).max(0) as usize
}

/// How many rows fit above the ship.
pub fn number_rows(screen_height: i32, ship_height: i32, alien_height: i32) -> usize {
    if alien_height <= 0 {
        return 0;
    }
    let available_space_y = screen_height - 3 * alien_height - ship_height;
    (available_space_y / (2 * alien_height)).max(0) as usize
}

pub fn create_alien(alien_number: usize, row_number: usize) -> Alien {
    let w = Alien::width();
    let h = Alien::height();
    Alien::new(
        w + 2 * w * alien_number as i32,
        h + 2 * h * row_number as i32,
    )
}

pub fn create_fleet(screen: Rect, ship_height: i32) -> Vec<Alien> {
    let columns = number_aliens_x(screen.w, Alien::width());
    let rows = number_rows(screen.h, ship_height, Alien::height());
    log::debug!("Creating fleet of {rows} rows x {columns} aliens");

    let mut aliens = Vec::with_capacity(rows * columns);
    for row_number in 0..rows {
        for alien_number in 0..columns {
            aliens.push(create_alien(alien_number, row_number));
        }
    }
    aliens
}

/// Drop the fleet and reverse its direction if any alien touches an edge.
pub fn check_fleet_edges(settings: &mut Settings, aliens: &mut [Alien], screen: Rect) -> bool {
    let at_edge = aliens.iter().any(|alien| alien.check_edges(screen));
    if at_edge {
        change_fleet_direction(settings, aliens);
    }
    at_edge
}

pub fn change_fleet_direction(settings: &mut Settings, aliens: &mut [Alien]) {
    for alien in aliens.iter_mut() {
        alien.drop_by(settings.fleet_drop_speed);
    }
    settings.fleet_direction *= -1;
}
