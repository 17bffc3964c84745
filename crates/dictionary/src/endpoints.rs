use reqwest::Url;

pub const RANDOM_WORD_API_URL: &str = "https://random-word-api.herokuapp.com";
pub const WIKTIONARY_URL: &str = "https://en.wiktionary.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordsEndpoint<'a> {
    RandomWords { count: usize, language: &'a str },
    /// Definitions always come from the English-language wiki, which carries a
    /// section per language; the caller picks the section after fetching.
    Definition { word: &'a str },
}

impl WordsEndpoint<'_> {
    pub fn url(&self, base_url: &Url) -> Url {
        let mut url = base_url.clone();
        match self {
            WordsEndpoint::RandomWords { count, language } => {
                url.set_path("/word");
                url.query_pairs_mut()
                    .clear()
                    .append_pair("number", &count.to_string())
                    .append_pair("lang", language);
            }
            WordsEndpoint::Definition { word } => {
                url.set_path("/w/api.php");
                url.query_pairs_mut()
                    .clear()
                    .append_pair("action", "parse")
                    .append_pair("format", "json")
                    .append_pair("prop", "wikitext")
                    .append_pair("page", word);
            }
        }
        url
    }
}
