use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::entities::{MapId, Obstacle, ObstacleKind, Projectile, ProjectileOwner, Tank};
use crate::game::GameState;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Tank,
    pub enemies: &'a [Tank],
    pub projectiles: &'a [Projectile],
    pub obstacles: &'a [Obstacle],
    pub map: MapId,
    pub score: u32,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);
        match view.game_state {
            GameState::Playing => {}
            GameState::Paused => self.render_paused(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the battlefield, entities, and HUD
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Field block between the HUD row and the controls row
        let field_outer = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let field = block.inner(field_outer);
        frame.render_widget(block, field_outer);

        if field.width == 0 || field.height == 0 {
            return;
        }

        self.render_background(frame, view.map, field);

        for obstacle in view.obstacles {
            let (glyph, color) = obstacle_glyph(obstacle.kind);
            self.put_cell(frame, field, obstacle.x, obstacle.y, glyph, color, true);
        }

        for enemy in view.enemies {
            self.put_cell(frame, field, enemy.x, enemy.y, tank_glyph(enemy), Color::Red, true);
        }

        self.put_cell(
            frame,
            field,
            view.player.x,
            view.player.y,
            tank_glyph(view.player),
            Color::Green,
            true,
        );

        for projectile in view.projectiles {
            let color = match projectile.owner {
                ProjectileOwner::Player => Color::White,
                ProjectileOwner::Enemy => Color::Yellow,
            };
            self.put_cell(frame, field, projectile.x, projectile.y, "•", color, false);
        }

        self.render_hud(frame, view, area);
    }

    /// Sparse per-map ground cover, stable from frame to frame
    fn render_background(&self, frame: &mut Frame, map: MapId, field: Rect) {
        let (glyph, color) = match map {
            MapId::Meadow => ("\"", Color::Green),
            MapId::Desert => (".", Color::Yellow),
            MapId::City => ("·", Color::DarkGray),
        };
        for row in 0..field.height {
            for col in 0..field.width {
                if (u32::from(row) * 7 + u32::from(col) * 13) % 41 == 0 {
                    let cell = Rect {
                        x: field.x + col,
                        y: field.y + row,
                        width: 1,
                        height: 1,
                    };
                    frame.render_widget(
                        Paragraph::new(glyph).style(Style::default().fg(color)),
                        cell,
                    );
                }
            }
        }
    }

    /// Projects a field position into one terminal cell and draws a glyph
    fn put_cell(
        &self,
        frame: &mut Frame,
        field: Rect,
        x: f32,
        y: f32,
        glyph: &str,
        color: Color,
        bold: bool,
    ) {
        let col = (x / FIELD_WIDTH * f32::from(field.width)) as u16;
        let row = (y / FIELD_HEIGHT * f32::from(field.height)) as u16;
        if col >= field.width || row >= field.height {
            return;
        }
        let cell = Rect {
            x: field.x + col,
            y: field.y + row,
            width: 1,
            height: 1,
        };
        let mut style = Style::default().fg(color);
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(Paragraph::new(glyph).style(style), cell);
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let hp = view.player.hp;
        let stats = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  HP: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{hp}"),
                if hp > 2 {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if hp > 1 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                },
            ),
            Span::styled("  Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.enemies.len()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Map: ", Style::default().fg(Color::DarkGray)),
            Span::styled(view.map.name(), Style::default().fg(Color::Cyan)),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[WASD/Arrows: Move] [Space/J: Fire] [P: Pause] [1-3: Map] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = Rect {
            x: (area.width / 2).saturating_sub(15),
            y: (area.height / 2).saturating_sub(3),
            width: 30.min(area.width),
            height: 6.min(area.height),
        };

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let game_over_text = vec![
            Line::from(""),
            Line::from("GAME OVER").centered().red().bold(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let overlay = Rect {
            x: (area.width / 2).saturating_sub(16),
            y: (area.height / 2).saturating_sub(4),
            width: 32.min(area.width),
            height: 9.min(area.height),
        };

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            overlay,
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn tank_glyph(tank: &Tank) -> &'static str {
    use crate::entities::Direction;
    match tank.facing {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

fn obstacle_glyph(kind: ObstacleKind) -> (&'static str, Color) {
    match kind {
        ObstacleKind::Brick => ("▒", Color::LightRed),
        ObstacleKind::Steel => ("█", Color::Gray),
        ObstacleKind::Tree => ("♣", Color::LightGreen),
        ObstacleKind::Water => ("~", Color::Blue),
        ObstacleKind::Rock => ("◆", Color::DarkGray),
        ObstacleKind::Cactus => ("†", Color::Green),
    }
}
