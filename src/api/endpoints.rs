pub const DATA_DRAGON_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";

pub fn champion_data_url(version: &str, lang: &str) -> String {
    format!("{}/{}/data/{}/champion.json", DATA_DRAGON_BASE, version, lang)
}

pub fn champion_image_url(version: &str, champion_id: &str) -> String {
    format!("{}/{}/img/champion/{}.png", DATA_DRAGON_BASE, version, champion_id)
}
