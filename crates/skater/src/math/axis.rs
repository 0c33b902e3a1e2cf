#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisDirection {
    X,
    Y,
}
