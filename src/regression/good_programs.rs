use super::run;

#[test]
fn arithmetic() {
    run("BEGIN x := 2 + 3 * 4; WRITE(x) END", &[], &[14]);
    run(
        "
        begin
            write((2 + 3) * 4);
            write(10 - 3 - 2);
            write(20 / 2 / 5);
            write(-7 / 2);
            write(7 - -2)
        end
        ",
        &[],
        &[20, 5, 2, -3, 9],
    );
}

#[test]
fn read_and_variables() {
    run(
        "
        begin
            x := read;
            y := read;
            write(x - y);
            write(z)
        end
        ",
        &[10, 3],
        &[7, 0],
    );
}

#[test]
fn comments_and_keyword_case() {
    run(
        "BEGIN /* x is set\n twice */ X := 1; x := X + 1; Write(x) /* done */ END",
        &[],
        &[2],
    );
}

#[test]
fn comparisons() {
    run(
        "
        begin
            if 1 = 1 then write(1) fi;
            if 1 != 1 then write(2) fi;
            if 1 < 2 then write(3) fi;
            if 2 > 1 then write(4) fi;
            if 2 <= 2 then write(5) fi;
            if 1 >= 2 then write(6) fi
        end
        ",
        &[],
        &[1, 3, 4, 5],
    );
}

#[test]
fn if_else() {
    let program = "
        begin
            x := read;
            if x > 0 then write(1) fi;
            if x > 0 then write(2) else write(3) fi
        end
        ";

    run(program, &[5], &[1, 2]);
    run(program, &[0], &[3]);
}

#[test]
fn while_checks_condition_first() {
    let program = "
        begin
            i := read;
            while i < 3 do
                write(i);
                i := i + 1
            od
        end
        ";

    run(program, &[0], &[0, 1, 2]);
    run(program, &[3], &[]);
}

#[test]
fn nested_while() {
    run(
        "
        begin
            i := 1;
            while i <= 3 do
                j := 1;
                while j <= i do
                    write(i * 10 + j);
                    j := j + 1
                od;
                i := i + 1
            od
        end
        ",
        &[],
        &[11, 21, 22, 31, 32, 33],
    );
}

// LOOP prints its line first, then reads the number of iterations
#[test]
fn counted_loop() {
    let program = "begin\n  loop write(7) endloop\nend";

    run(program, &[3], &[2, 7, 7, 7]);
    run(program, &[1], &[2, 7]);
    run(program, &[0], &[2]);
    run(program, &[-4], &[2]);
}

#[test]
fn nested_counted_loops() {
    run(
        "begin\nloop\n  loop write(1) endloop\nendloop\nend",
        &[2, 1, 3],
        &[2, 3, 1, 3, 1, 1, 1],
    );
}

#[test]
fn counter_is_hidden() {
    // the body can't reach the counter, assigning `n` doesn't change the count
    run(
        "begin n := 0; loop n := n + 1 endloop; write(n) end",
        &[4],
        &[1, 4],
    );
}

#[test]
fn switch() {
    let program = "
        begin
            switch read
                case 1: write(10) break;
                case 2: write(20); write(21) break;
                case -1: write(-10) break;
            default: write(0)
            endswitch;
            write(99)
        end
        ";

    run(program, &[1], &[10, 99]);
    run(program, &[2], &[20, 21, 99]);
    run(program, &[-1], &[-10, 99]);
    run(program, &[7], &[0, 99]);
}

#[test]
fn switch_without_cases() {
    run(
        "begin switch 5 default: write(1) endswitch end",
        &[],
        &[1],
    );
}

#[test]
fn switch_inside_while() {
    run(
        "
        begin
            i := 0;
            while i < 4 do
                switch i * 2
                    case 2: write(10) break;
                    case 4: write(20) break;
                default: write(0)
                endswitch;
                i := i + 1
            od
        end
        ",
        &[],
        &[0, 10, 20, 0],
    );
}

#[test]
fn nested_switch() {
    let program = "
        begin
            a := read;
            b := read;
            switch a
                case 1:
                    switch b
                        case 1: write(11) break;
                    default: write(10)
                    endswitch
                break;
            default: write(0)
            endswitch
        end
        ";

    run(program, &[1, 1], &[11]);
    run(program, &[1, 5], &[10]);
    run(program, &[2, 1], &[0]);
}
