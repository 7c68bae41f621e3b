mod center;
mod side;
mod top;
