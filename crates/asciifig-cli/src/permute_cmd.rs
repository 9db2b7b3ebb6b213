use asciifig::permute::permutations;

pub fn run(chars: &str) -> Result<(), i32> {
    for perm in permutations(chars) {
        println!("{perm}");
    }
    Ok(())
}
