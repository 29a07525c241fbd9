//! Sample IsiLang programs offered in the example selector

pub const HELLO_WORLD: &str = r#"programa
    escreva("Hello world").
fimprog."#;

pub const IO: &str = "programa
    declare a: int.
    declare b: int.

    leia(a).
    leia(b).

    declare c: int.
    c := a * b.

    escreva(c).
fimprog.
";

pub const FIBONACCI: &str = "programa
    declare n: int.
    leia(n).

    declare i: int.
    i := 0.

    declare x1: int.
    x1 := 0.

    declare x2: int.
    x2 := 1.

    declare x: int.
    enquanto (i < n) {
        escreva(x1).

        x := x1 + x2.

        x1 := x2.
        x2 := x.

        i := i + 1.
    }
fimprog.
";

pub const CONDITIONAL: &str = r#"programa
    declare a: int.
    declare b: int.

    leia(a).
    leia(b).

    se (a > b) {
        escreva("maior").
    } senao {
        escreva("menor").
    }
fimprog.
"#;
