/// Axis-aligned integer rectangle used for sprite placement and collision.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    #[inline]
    pub const fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    pub fn set_center_y(&mut self, cy: i32) {
        self.y = cy - self.h / 2;
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.set_center_x(cx);
        self.set_center_y(cy);
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap test. Rectangles that only share an edge do not collide.
    pub fn collides_with(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open point test: the right and bottom edges are outside.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn edges_and_centers() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center_x(), 25);
        assert_eq!(r.center_y(), 40);
    }

    #[test]
    fn setters_keep_size() {
        let mut r = Rect::new(0, 0, 20, 10);
        r.set_center(100, 50);
        assert_eq!((r.x, r.y, r.w, r.h), (90, 45, 20, 10));
        r.set_right(200);
        assert_eq!(r.right(), 200);
        r.set_bottom(80);
        assert_eq!(r.bottom(), 80);
        assert_eq!(r.w, 20);
        assert_eq!(r.h, 10);
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        let c = Rect::new(9, 9, 10, 10);
        assert!(!a.collides_with(&b));
        assert!(a.collides_with(&c));
        assert!(c.collides_with(&a));
    }

    #[test]
    fn empty_rect_never_collides() {
        let a = Rect::new(0, 0, 10, 10);
        let empty = Rect::new(5, 5, 0, 4);
        assert!(!a.collides_with(&empty));
        assert!(!empty.collides_with(&a));
    }

    #[test]
    fn point_containment_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(9, 9));
        assert!(!r.contains_point(10, 5));
        assert!(!r.contains_point(5, 10));
        assert!(!r.contains_point(-1, 5));
    }
}
