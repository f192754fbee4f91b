use crate::error::MathError;

macro_rules! decl_op {
    ($(#[$a:meta])* $v:vis enum $n:ident { $($x:ident -> $s:literal $(| $alias:literal)*,)* }) => {
        $(#[$a])*
        $v enum $n {
            $($x,)*
        }

        impl $n {
            pub const ALL: &'static [$n] = &[$($n::$x,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($n::$x => $s,)*
                }
            }
        }

        impl std::fmt::Display for $n {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $n {
            type Err = MathError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($s $(| $alias)* => Ok($n::$x),)*
                    _ => Err(MathError::UnknownOperator(s.to_owned())),
                }
            }
        }

        #[cfg(any(test, feature = "arb"))]
        impl quickcheck::Arbitrary for $n {
            fn arbitrary(g: &mut quickcheck::Gen) -> Self {
                *g.choose($n::ALL).unwrap()
            }
        }
    };
}

decl_op! {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
    pub enum BinaryOp {
        Add -> "+" | "add",
        Sub -> "-" | "sub" | "subtract",
        Mul -> "*" | "mul" | "multiply",
        Div -> "/" | "div" | "divide",
        Mod -> "%" | "mod" | "modulo",
        Pow -> "^" | "pow" | "power",
        Min -> "min",
        Max -> "max",
    }
}

decl_op! {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
    pub enum UnaryOp {
        Abs -> "abs",
        Floor -> "floor",
        Ceiling -> "ceiling" | "ceil",
        Round -> "round",
        Sqrt -> "sqrt",
    }
}

impl BinaryOp {
    /// Whether swapping the operands leaves the result unchanged.
    pub fn commutes(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Mul | BinaryOp::Min | BinaryOp::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for op in BinaryOp::ALL {
            assert_eq!(op.as_str().parse::<BinaryOp>().unwrap(), *op);
        }
        for op in UnaryOp::ALL {
            assert_eq!(op.to_string().parse::<UnaryOp>().unwrap(), *op);
        }
        assert_eq!("Multiply".parse::<BinaryOp>().unwrap(), BinaryOp::Mul);
        assert_eq!("ceil".parse::<UnaryOp>().unwrap(), UnaryOp::Ceiling);
        assert_eq!("sin".parse::<UnaryOp>(), Err(MathError::UnknownOperator("sin".to_owned())));
    }
}
