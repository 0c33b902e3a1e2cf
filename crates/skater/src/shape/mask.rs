use crate::math::{point::Point, FloatNum};

use super::{utils::is_point_inside_polygon, EdgeIterable};

/// Square occupancy grid of a shape, row-major, `(0, 0)` in the top-left.
///
/// A pixel is set when its coordinate lies inside the shape or on its boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceMask {
    size: usize,
    cells: Vec<bool>,
}

impl SurfaceMask {
    pub fn from_shape(shape: &impl EdgeIterable, size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);

        for y in 0..size {
            for x in 0..size {
                let pixel = Point::new(x as FloatNum, y as FloatNum);
                let is_set = shape.edge_iter().any(|edge| edge.contains(&pixel))
                    || is_point_inside_polygon(&pixel, shape.edge_iter());
                cells.push(is_set);
            }
        }

        Self { size, cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// `false` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.cells[y * self.size + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks panics on zero
        self.cells.chunks(self.size.max(1))
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::shape::{polygon::Polygon, rect::rectangle};

    use super::*;

    fn grid(mask: &SurfaceMask) -> Vec<Vec<u8>> {
        mask.rows()
            .map(|row| row.iter().map(|&cell| cell as u8).collect())
            .collect()
    }

    #[test]
    fn test_triangle_mask() {
        let polygon = Polygon::new([
            Point::new(0., 0.),
            Point::new(4., 0.),
            Point::new(2., 2.),
        ]);
        let mask = polygon.build_surface_mask();

        assert_eq!(mask.size(), 6);
        assert_eq!(
            grid(&mask),
            vec![
                vec![1, 1, 1, 1, 1, 0],
                vec![0, 1, 1, 1, 0, 0],
                vec![0, 0, 1, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_rectangle_mask_includes_edges() {
        let mask = rectangle((0., 0.), (2., 2.)).build_surface_mask();

        // radius of a 2x2 square is ceil(sqrt(2)) = 2
        assert_eq!(mask.size(), 4);
        assert_eq!(mask.count(), 9);
        assert!(mask.get(2, 2));
        assert!(!mask.get(3, 0));
        assert!(!mask.get(10, 10));
    }
}
