use crate::geometry::Rect;

/// A monitor as reported by the host shell: its usable work area in
/// pixels (panels and docks already excluded) and its scaling factor.
/// Both are read-only inputs; the shell owns monitor lifecycle.
#[derive(Debug, Clone)]
pub struct Monitor {
    pub index: usize,
    pub work_area: Rect,
    pub scaling_factor: f64,
}

impl Monitor {
    pub fn new(index: usize, work_area: Rect, scaling_factor: f64) -> Self {
        Self {
            index,
            work_area,
            scaling_factor,
        }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.work_area.x
            && x < self.work_area.x + self.work_area.width as i32
            && y >= self.work_area.y
            && y < self.work_area.y + self.work_area.height as i32
    }
}

/// Monitor whose work area contains the given point, if any.
pub fn monitor_at(x: i32, y: i32, monitors: &[Monitor]) -> Option<&Monitor> {
    monitors.iter().find(|monitor| monitor.contains_point(x, y))
}

/// Drops duplicate geometries and orders monitors top-to-bottom,
/// left-to-right, so iteration order is stable across queries.
pub fn normalize_monitors(monitors: Vec<Monitor>) -> Vec<Monitor> {
    let mut normalized = Vec::<Monitor>::new();

    for monitor in monitors {
        let is_duplicate_monitor = normalized
            .iter()
            .any(|existing| existing.work_area == monitor.work_area);

        if !is_duplicate_monitor {
            normalized.push(monitor);
        }
    }

    normalized.sort_by(|a, b| match a.work_area.y.cmp(&b.work_area.y) {
        std::cmp::Ordering::Equal => a.work_area.x.cmp(&b.work_area.x),
        other => other,
    });

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let monitor = Monitor::new(0, Rect::new(0, 0, 1920, 1080), 1.0);

        assert!(monitor.contains_point(0, 0));
        assert!(monitor.contains_point(1919, 1079));
        assert!(!monitor.contains_point(1920, 0));
        assert!(!monitor.contains_point(0, 1080));
    }

    #[test]
    fn monitor_at_picks_the_monitor_under_the_point() {
        let monitors = vec![
            Monitor::new(0, Rect::new(0, 0, 1920, 1080), 1.0),
            Monitor::new(1, Rect::new(1920, 0, 2560, 1440), 2.0),
        ];

        assert_eq!(monitor_at(100, 100, &monitors).map(|m| m.index), Some(0));
        assert_eq!(monitor_at(1920, 100, &monitors).map(|m| m.index), Some(1));
        assert!(monitor_at(-1, 100, &monitors).is_none());
    }

    #[test]
    fn normalize_drops_duplicates_and_orders_by_position() {
        let monitors = vec![
            Monitor::new(0, Rect::new(1920, 0, 1920, 1080), 1.0),
            Monitor::new(1, Rect::new(0, 0, 1920, 1080), 1.0),
            Monitor::new(2, Rect::new(1920, 0, 1920, 1080), 1.0),
        ];

        let normalized = normalize_monitors(monitors);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].work_area.x, 0);
        assert_eq!(normalized[1].work_area.x, 1920);
    }
}
