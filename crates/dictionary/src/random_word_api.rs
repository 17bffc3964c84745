// https://random-word-api.herokuapp.com - number, lang
// lang supports en, es, it, de, fr, zh, pt-br

use reqwest::Url;

use crate::endpoints::WordsEndpoint;
use crate::http::{HttpClient, HttpResponse};
use crate::DictionaryError;

pub(crate) async fn get_random_words(
    client: &impl HttpClient,
    base_url: &Url,
    count: usize,
    language: &str,
) -> Result<Vec<String>, DictionaryError> {
    let url = WordsEndpoint::RandomWords { count, language }.url(base_url);
    let res = client.get(&url).await?;
    map_random_words(&res)
}

pub(crate) fn map_random_words(res: &HttpResponse) -> Result<Vec<String>, DictionaryError> {
    if !res.is_ok() {
        return Err(DictionaryError::InvalidData);
    }
    serde_json::from_slice::<Vec<String>>(&res.body).map_err(|_| DictionaryError::InvalidData)
}
