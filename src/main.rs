use rand::Rng;
use rungs_arch::SuccArchimedean;
use rungs_core::domains::{
    bounded_nat_succ, byte_pred, byte_succ, int_pred, int_succ, BoundedNat,
};
use rungs_core::laws::{check_monotone, check_pred_laws, check_round_trip, check_succ_laws};
use rungs_core::witness::Greatest;
use rungs_extend::dual::{dualize_succ, undualize_pred};
use rungs_extend::with_top::succ_with_top;
use rungs_extend::WithTop;

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║            RANDOMIZED STEP-LAW SAMPLING                    ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    sample_integer_laws(2_000);
    sample_byte_laws(1_000);
    walk_archimedean_chains();
    demo_extension_and_duality();

    println!("\n✓ All demos completed successfully!");
}

fn sample_integer_laws(count: usize) {
    let mut rng = rand::thread_rng();
    let samples: Vec<i64> = (0..count).map(|_| rng.gen_range(-10_000..10_000)).collect();

    let succ = int_succ();
    let pred = int_pred();
    report("int succ laws", check_succ_laws(&succ, &samples).is_ok());
    report("int pred laws", check_pred_laws(&pred, &samples).is_ok());
    report("int monotone", check_monotone(&succ, &samples).is_ok());
    report(
        "int round trip",
        check_round_trip(&succ, &pred, &samples).is_ok(),
    );
}

fn sample_byte_laws(count: usize) {
    let mut rng = rand::thread_rng();
    let samples: Vec<u8> = (0..count).map(|_| rng.gen()).collect();

    report("byte succ laws", check_succ_laws(&byte_succ(), &samples).is_ok());
    report(
        "byte round trip",
        check_round_trip(&byte_succ(), &byte_pred(), &samples).is_ok(),
    );
}

fn walk_archimedean_chains() {
    let mut rng = rand::thread_rng();
    let arch = SuccArchimedean::assert(int_succ());

    let a: i64 = rng.gen_range(-1_000..1_000);
    let n: u64 = rng.gen_range(0..500);
    let b = a + n as i64;

    println!("\n→ archimedean walk from {a} to {b}");
    println!("  reachable:      {}", arch.reachable(&a, &b));
    println!("  witness count:  {:?}", arch.steps_between(&a, &b));
    let visited = arch.induct(&a, &b, 0u64, |_, acc| acc + 1);
    println!("  rungs visited:  {visited:?}");
}

fn demo_extension_and_duality() {
    // Naturals capped at 5, extended with a sentinel top.
    let base = bounded_nat_succ::<5>();
    let top = match Greatest::checked(BoundedNat::top(), &base) {
        Ok(top) => top,
        Err(e) => {
            println!("✗ extremum witness rejected: {e}");
            return;
        }
    };
    let lifted = succ_with_top(&base, &top);

    println!("\n→ WithTop over naturals capped at 5");
    println!(
        "  succ(3)   = {:?}",
        lifted.succ(&WithTop::Value(BoundedNat::new(3)))
    );
    println!(
        "  succ(5)   = {:?}",
        lifted.succ(&WithTop::Value(BoundedNat::new(5)))
    );
    println!("  succ(Top) = {:?}", lifted.succ(&WithTop::Top));

    // There and back across the dual bridge.
    let back = undualize_pred(&dualize_succ(&int_succ()));
    println!("\n→ dual bridge round trip");
    println!("  succ(41) via bridge = {}", back.succ(&41));
}

fn report(name: &str, ok: bool) {
    let mark = if ok { "✓" } else { "✗" };
    println!("{mark} {name}");
}
