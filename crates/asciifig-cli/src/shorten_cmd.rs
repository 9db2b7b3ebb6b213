use asciifig::shortener::UrlShortener;

pub fn run(urls: &[String]) -> Result<(), i32> {
    let mut shortener = UrlShortener::new();
    for url in urls {
        let code = shortener.encode(url);
        println!("{code}\t{url}");
    }
    Ok(())
}
