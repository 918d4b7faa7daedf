//! Curated source registry. The set is intended to change only by edit.

use policyradar_common::FeedSource;

/// Substrings that disqualify a source name from being fetched or emitted.
const BLACKLIST: &[&str] = &[
    "Bollywood",
    "Entertainment Desk",
    "Sportstar",
    "Cricbuzz",
    "Gadgets 360",
    "HT City",
    "Showsha",
    "Filmfare",
    "Pinkvilla",
];

/// Sources favoured by the Google News `site:` queries and the ranker.
const PREFERRED: &[&str] = &[
    "Press Information Bureau",
    "PRS Legislative Research",
    "The Hindu",
    "The Indian Express",
    "LiveLaw",
    "Bar and Bench",
    "MediaNama",
    "Observer Research Foundation",
    "Internet Freedom Foundation",
    "Mint",
];

pub fn blacklist() -> &'static [&'static str] {
    BLACKLIST
}

pub fn preferred_sources() -> &'static [&'static str] {
    PREFERRED
}

/// True if the source name contains any blacklist substring.
pub fn is_blacklisted(source_name: &str) -> bool {
    BLACKLIST.iter().any(|b| source_name.contains(b))
}

/// The full curated registry, grouped by default category.
pub fn list_sources() -> Vec<FeedSource> {
    SOURCES.to_vec()
}

macro_rules! src {
    ($name:expr, $url:expr, $category:expr) => {
        FeedSource { name: $name, url: $url, category: $category }
    };
}

#[rustfmt::skip]
const SOURCES: &[FeedSource] = &[
    // ------------------------------------------------------------------
    // Government portals and regulators
    // ------------------------------------------------------------------
    src!("Press Information Bureau", "https://pib.gov.in/RssMain.aspx?ModId=6&Lang=1&Regid=3", "Governance & Administration"),
    src!("PIB All Releases", "https://pib.gov.in/AllReleasem.aspx", "Governance & Administration"),
    src!("Ministry of Electronics & IT", "https://www.meity.gov.in/whatsnew", "Technology Policy"),
    src!("Ministry of Finance", "https://finmin.nic.in/press_room", "Economic Policy"),
    src!("Ministry of Home Affairs", "https://www.mha.gov.in/en/media/whats-new", "Governance & Administration"),
    src!("Ministry of External Affairs", "https://www.mea.gov.in/press-releases.htm", "Foreign Policy"),
    src!("Ministry of Defence", "https://mod.gov.in/en/press-releases", "Defence & Security"),
    src!("Ministry of Health", "https://main.mohfw.gov.in/media/press-release", "Healthcare Policy"),
    src!("Ministry of Education", "https://www.education.gov.in/press-releases", "Education Policy"),
    src!("Ministry of Agriculture", "https://agricoop.gov.in/en/whatsnew", "Agricultural Policy"),
    src!("Ministry of Environment", "https://moef.gov.in/whats-new/", "Environmental Policy"),
    src!("Ministry of Labour", "https://labour.gov.in/whatsnew", "Social Policy"),
    src!("Ministry of Power", "https://powermin.gov.in/en/whats-new", "Renewable Energy Policy"),
    src!("Ministry of New & Renewable Energy", "https://mnre.gov.in/whats-new/", "Renewable Energy Policy"),
    src!("Ministry of Corporate Affairs", "https://www.mca.gov.in/content/mca/global/en/notifications-tender/news-updates.html", "Economic Policy"),
    src!("Ministry of Commerce", "https://commerce.gov.in/press-releases/", "Economic Policy"),
    src!("Ministry of Railways", "https://indianrailways.gov.in/railwayboard/view_section.jsp?lang=0&id=0,1,304", "Governance & Administration"),
    src!("Ministry of Road Transport", "https://morth.nic.in/whats-new", "Governance & Administration"),
    src!("Ministry of Rural Development", "https://rural.gov.in/en/press-release", "Social Policy"),
    src!("Ministry of Women & Child Development", "https://wcd.gov.in/whats-new", "Social Policy"),
    src!("Ministry of Skill Development", "https://www.msde.gov.in/en/whats-new", "Education Policy"),
    src!("Ministry of Jal Shakti", "https://jalshakti-dowr.gov.in/whats-new/", "Conservation Policy"),
    src!("Department of Telecommunications", "https://dot.gov.in/whatsnew", "Technology Policy"),
    src!("Department of Science & Technology", "https://dst.gov.in/whats-new", "Technology Policy"),
    src!("DPIIT", "https://dpiit.gov.in/whats-new", "Economic Policy"),
    src!("Reserve Bank of India", "https://rbi.org.in/Scripts/BS_PressReleaseDisplay.aspx", "Economic Policy"),
    src!("RBI Notifications", "https://www.rbi.org.in/notifications_rss.xml", "Economic Policy"),
    src!("SEBI", "https://www.sebi.gov.in/sebirss.xml", "Economic Policy"),
    src!("TRAI", "https://www.trai.gov.in/rss.xml", "Technology Policy"),
    src!("TRAI Regulations", "https://www.trai.gov.in/notifications/regulation", "Technology Policy"),
    src!("IRDAI", "https://irdai.gov.in/press-releases", "Economic Policy"),
    src!("PFRDA", "https://www.pfrda.org.in/index1.cshtml?lsid=237", "Economic Policy"),
    src!("Competition Commission of India", "https://www.cci.gov.in/media-gallery/press-release", "Economic Policy"),
    src!("Central Electricity Regulatory Commission", "https://cercind.gov.in/whats_new.html", "Renewable Energy Policy"),
    src!("CPCB", "https://cpcb.nic.in/important-notifications/", "Environmental Policy"),
    src!("FSSAI", "https://fssai.gov.in/cms/press-releases.php", "Healthcare Policy"),
    src!("CDSCO", "https://cdsco.gov.in/opencms/opencms/en/Notifications/Public-Notices/", "Healthcare Policy"),
    src!("UGC", "https://www.ugc.gov.in/publication/ugc_notices", "Education Policy"),
    src!("AICTE", "https://www.aicte-india.org/bulletins/circulars", "Education Policy"),
    src!("Niti Aayog", "https://www.niti.gov.in/whats-new", "Governance & Administration"),
    src!("Lok Sabha", "https://loksabha.nic.in/", "Constitutional & Legal"),
    src!("Rajya Sabha", "https://rajyasabha.nic.in/", "Constitutional & Legal"),
    src!("Gazette of India", "https://egazette.gov.in/(S(1))/Default.aspx", "Governance & Administration"),
    src!("Election Commission of India", "https://www.eci.gov.in/press-releases", "Governance & Administration"),
    src!("Supreme Court of India", "https://www.sci.gov.in/news-updates/", "Constitutional & Legal"),
    src!("CAG of India", "https://cag.gov.in/en/press-release", "Governance & Administration"),
    src!("UIDAI", "https://uidai.gov.in/en/media-resources/media/press-releases.html", "Technology Policy"),
    src!("CERT-In", "https://www.cert-in.org.in/", "Technology Policy"),
    src!("MeitY Press", "https://www.meity.gov.in/pressrelease", "Technology Policy"),
    src!("Invest India", "https://www.investindia.gov.in/whats-new", "Economic Policy"),

    // ------------------------------------------------------------------
    // Legal and constitutional reporting
    // ------------------------------------------------------------------
    src!("LiveLaw", "https://www.livelaw.in/category/top-stories/google_feeds.xml", "Constitutional & Legal"),
    src!("Bar and Bench", "https://www.barandbench.com/feed", "Constitutional & Legal"),
    src!("SCC Online Blog", "https://www.scconline.com/blog/feed/", "Constitutional & Legal"),
    src!("LiveLaw Supreme Court", "https://www.livelaw.in/category/news-updates/google_feeds.xml", "Constitutional & Legal"),
    src!("Bar and Bench Columns", "https://www.barandbench.com/columns/feed", "Constitutional & Legal"),
    src!("The Leaflet", "https://theleaflet.in/feed/", "Constitutional & Legal"),
    src!("Supreme Court Observer", "https://www.scobserver.in/feed/", "Constitutional & Legal"),
    src!("Legally India", "https://www.legallyindia.com/feed", "Constitutional & Legal"),

    // ------------------------------------------------------------------
    // Think tanks and research organizations
    // ------------------------------------------------------------------
    src!("PRS Legislative Research", "https://prsindia.org/billtrack/recent", "Constitutional & Legal"),
    src!("Observer Research Foundation", "https://www.orfonline.org/feed/?post_type=research", "Policy Analysis"),
    src!("ORF Expert Speak", "https://www.orfonline.org/expert-speak/feed/", "Policy Analysis"),
    src!("CPR India", "https://cprindia.org/feed/", "Policy Analysis"),
    src!("Carnegie India", "https://carnegieendowment.org/india", "Policy Analysis"),
    src!("Takshashila Institution", "https://takshashila.org.in/feed", "Policy Analysis"),
    src!("Gateway House", "https://www.gatewayhouse.in/feed/", "Foreign Policy"),
    src!("IDFC Institute", "https://www.idfcinstitute.org/news/", "Policy Analysis"),
    src!("CEEW", "https://www.ceew.in/press-releases", "Climate Policy"),
    src!("TERI", "https://www.teriin.org/press-release", "Environmental Policy"),
    src!("CSE India", "https://www.cseindia.org/rss.xml", "Environmental Policy"),
    src!("ICRIER", "https://icrier.org/newsevents/", "Economic Policy"),
    src!("NIPFP", "https://www.nipfp.org.in/blog/feed/", "Economic Policy"),
    src!("Vidhi Legal Policy", "https://vidhilegalpolicy.in/feed/", "Constitutional & Legal"),
    src!("Brookings India", "https://www.brookings.edu/topic/india/feed/", "Policy Analysis"),
    src!("IDSA", "https://www.idsa.in/rss.xml", "Defence & Security"),

    // ------------------------------------------------------------------
    // Technology policy
    // ------------------------------------------------------------------
    src!("MediaNama", "https://www.medianama.com/feed/", "Technology Policy"),
    src!("Internet Freedom Foundation", "https://internetfreedom.in/rss", "Technology Policy"),
    src!("Entrackr", "https://entrackr.com/feed/", "Technology Policy"),
    src!("The Ken", "https://the-ken.com/feed/", "Technology Policy"),
    src!("Inc42 Policy", "https://inc42.com/tag/policy/feed/", "Technology Policy"),
    src!("ET Telecom Policy", "https://telecom.economictimes.indiatimes.com/rss/policy", "Technology Policy"),
    src!("ET Tech Policy", "https://economictimes.indiatimes.com/tech/rssfeeds/13357270.cms", "Technology Policy"),
    src!("Moneycontrol Technology", "https://www.moneycontrol.com/rss/technology.xml", "Technology Policy"),
    src!("NASSCOM Community", "https://community.nasscom.in/rss.xml", "Technology Policy"),
    src!("Software Freedom Law Centre", "https://sflc.in/rss.xml", "Technology Policy"),

    // ------------------------------------------------------------------
    // Business and economic press
    // ------------------------------------------------------------------
    src!("The Hindu Business Line", "https://www.thehindubusinessline.com/economy/feeder/default.rss", "Economic Policy"),
    src!("Business Standard Economy", "https://www.business-standard.com/rss/economy-policy-101.rss", "Economic Policy"),
    src!("Economic Times Policy", "https://economictimes.indiatimes.com/news/economy/policy/rssfeeds/1286551326.cms", "Economic Policy"),
    src!("Mint Economy", "https://www.livemint.com/rss/economy", "Economic Policy"),
    src!("Mint Opinion", "https://www.livemint.com/rss/opinion", "Policy Analysis"),
    src!("Financial Express Economy", "https://www.financialexpress.com/economy/feed/", "Economic Policy"),
    src!("Economic Times Economy", "https://economictimes.indiatimes.com/news/economy/rssfeeds/1373380680.cms", "Economic Policy"),
    src!("Business Today Economy", "https://www.businesstoday.in/rssfeeds/?id=economy", "Economic Policy"),
    src!("Moneycontrol Economy", "https://www.moneycontrol.com/rss/economy.xml", "Economic Policy"),
    src!("BloombergQuint Law & Policy", "https://www.bqprime.com/feed/law-and-policy", "Economic Policy"),
    src!("Hindu Business Line Policy", "https://www.thehindubusinessline.com/news/national/feeder/default.rss", "Economic Policy"),
    src!("CNBC TV18 Economy", "https://www.cnbctv18.com/commonfeeds/v1/cne/rss/economy.xml", "Economic Policy"),
    src!("Financial Express Policy", "https://www.financialexpress.com/policy/feed/", "Economic Policy"),
    src!("ET BFSI Policy", "https://bfsi.economictimes.indiatimes.com/rss/policy", "Economic Policy"),
    src!("Business Standard Finance", "https://www.business-standard.com/rss/finance-103.rss", "Economic Policy"),

    // ------------------------------------------------------------------
    // Major newspapers, national affairs
    // ------------------------------------------------------------------
    src!("The Hindu National", "https://www.thehindu.com/news/national/feeder/default.rss", "Governance & Administration"),
    src!("The Hindu Opinion", "https://www.thehindu.com/opinion/feeder/default.rss", "Policy Analysis"),
    src!("The Hindu Education", "https://www.thehindu.com/education/feeder/default.rss", "Education Policy"),
    src!("The Hindu Agriculture", "https://www.thehindu.com/business/agri-business/feeder/default.rss", "Agricultural Policy"),
    src!("The Hindu Technology", "https://www.thehindu.com/sci-tech/technology/feeder/default.rss", "Technology Policy"),
    src!("The Hindu Energy", "https://www.thehindu.com/business/Industry/feeder/default.rss", "Economic Policy"),
    src!("Indian Express India", "https://indianexpress.com/section/india/feed/", "Governance & Administration"),
    src!("Indian Express Opinion", "https://indianexpress.com/section/opinion/columns/feed/", "Policy Analysis"),
    src!("Indian Express Explained", "https://indianexpress.com/section/explained/feed/", "Policy Analysis"),
    src!("Indian Express Business", "https://indianexpress.com/section/business/feed/", "Economic Policy"),
    src!("Times of India India", "https://timesofindia.indiatimes.com/rssfeeds/296589292.cms", "Governance & Administration"),
    src!("Times of India Business", "https://timesofindia.indiatimes.com/rssfeeds/1898055.cms", "Economic Policy"),
    src!("Hindustan Times India", "https://www.hindustantimes.com/feeds/rss/india-news/rssfeed.xml", "Governance & Administration"),
    src!("Hindustan Times Opinion", "https://www.hindustantimes.com/feeds/rss/opinion/rssfeed.xml", "Policy Analysis"),
    src!("The Print India", "https://theprint.in/category/india/feed/", "Governance & Administration"),
    src!("The Print Judiciary", "https://theprint.in/category/judiciary/feed/", "Constitutional & Legal"),
    src!("The Wire", "https://thewire.in/rss", "Governance & Administration"),
    src!("Scroll.in", "https://scroll.in/feed", "Governance & Administration"),
    src!("Scroll Opinion", "https://scroll.in/rss/opinion", "Policy Analysis"),
    src!("NDTV India News", "https://feeds.feedburner.com/ndtvnews-india-news", "Governance & Administration"),
    src!("India Today India", "https://www.indiatoday.in/rss/1206514", "Governance & Administration"),
    src!("News18 India", "https://www.news18.com/rss/india.xml", "Governance & Administration"),
    src!("The News Minute", "https://www.thenewsminute.com/collection/latest-stories", "Governance & Administration"),
    src!("FirstPost India", "https://www.firstpost.com/commonfeeds/v1/mfp/rss/india.xml", "Governance & Administration"),
    src!("Deccan Herald National", "https://www.deccanherald.com/rss-internal/national.rss", "Governance & Administration"),
    src!("The Telegraph India", "https://www.telegraphindia.com/feeds/rss.jsp?id=3", "Governance & Administration"),
    src!("Outlook India National", "https://www.outlookindia.com/rss/national", "Governance & Administration"),
    src!("Frontline", "https://frontline.thehindu.com/feeder/default.rss", "Policy Analysis"),
    src!("Caravan Magazine", "https://caravanmagazine.in/rss.xml", "Policy Analysis"),
    src!("Newslaundry", "https://www.newslaundry.com/feed", "Policy Analysis"),

    // ------------------------------------------------------------------
    // Defence, security, and international coverage of India
    // ------------------------------------------------------------------
    src!("PTI News", "https://www.ptinews.com/home", "Defence & Security"),
    src!("NDTV Defense", "https://www.ndtv.com/authors/vishnu-som-692", "Defence & Security"),
    src!("Reuters India", "https://www.reuters.com/world/india/", "Defence & Security"),
    src!("AFP News", "https://www.afp.com/en/actus/afp_communique/all/feed", "Defence & Security"),
    src!("EIN News India", "https://www.einnews.com/rss/yLbHd_qDcH18vHzj", "Defence & Security"),
    src!("AP News India", "https://apnews.com/hub/india", "Defence & Security"),
    src!("The Independent India", "https://www.independent.co.uk/asia/india", "Defence & Security"),
    src!("BBC India", "https://www.bbc.com/news/world/asia/india", "Defence & Security"),
    src!("CNN India", "https://edition.cnn.com/world/india", "Defence & Security"),
    src!("France 24 India", "https://www.france24.com/en/tag/india/", "Defence & Security"),
    src!("Al Jazeera India", "https://www.aljazeera.com/where/india/", "Defence & Security"),
    src!("The Diplomat South Asia", "https://thediplomat.com/regions/south-asia/feed/", "Foreign Policy"),
    src!("Defence News India", "https://www.defencenews.in/feed", "Defence & Security"),
    src!("Bharat Shakti", "https://bharatshakti.in/feed/", "Defence & Security"),
    src!("Force India", "https://forceindia.net/feed/", "Defence & Security"),
    src!("Indian Defence Review", "http://www.indiandefencereview.com/feed/", "Defence & Security"),
    src!("The Hindu International", "https://www.thehindu.com/news/international/feeder/default.rss", "Foreign Policy"),
    src!("ANI News", "https://aninews.in/rss/feed.xml", "Governance & Administration"),

    // ------------------------------------------------------------------
    // Health, environment, education, agriculture
    // ------------------------------------------------------------------
    src!("Economic Times Healthcare", "https://health.economictimes.indiatimes.com/rss/topstories", "Healthcare Policy"),
    src!("ET Health Policy", "https://health.economictimes.indiatimes.com/rss/policy", "Healthcare Policy"),
    src!("Down To Earth", "https://www.downtoearth.org.in/rss", "Environmental Policy"),
    src!("Mongabay India", "https://india.mongabay.com/feed/", "Environmental Policy"),
    src!("Carbon Copy", "https://carboncopy.info/feed/", "Climate Policy"),
    src!("Climate Home India", "https://www.climatechangenews.com/feed/", "Climate Policy"),
    src!("Mercom India", "https://www.mercomindia.com/feed", "Renewable Energy Policy"),
    src!("PV Magazine India", "https://www.pv-magazine-india.com/feed/", "Renewable Energy Policy"),
    src!("Saur Energy", "https://www.saurenergy.com/feed", "Renewable Energy Policy"),
    src!("ET Energy World", "https://energy.economictimes.indiatimes.com/rss/topstories", "Renewable Energy Policy"),
    src!("India Water Portal", "https://www.indiawaterportal.org/rss.xml", "Conservation Policy"),
    src!("Sanctuary Nature Foundation", "https://sanctuarynaturefoundation.org/feed", "Conservation Policy"),
    src!("The Better India Environment", "https://www.thebetterindia.com/topics/environment/feed/", "Environmental Policy"),
    src!("EdexLive", "https://www.edexlive.com/feeds/rss", "Education Policy"),
    src!("Careers360 News", "https://news.careers360.com/feed", "Education Policy"),
    src!("ET Education", "https://economictimes.indiatimes.com/industry/services/education/rssfeeds/13358070.cms", "Education Policy"),
    src!("Krishi Jagran", "https://krishijagran.com/rss/news/", "Agricultural Policy"),
    src!("Rural Voice", "https://www.ruralvoice.in/rss", "Agricultural Policy"),
    src!("Gaon Connection", "https://www.gaonconnection.com/feed/", "Agricultural Policy"),
    src!("Ag Moneycontrol", "https://www.moneycontrol.com/rss/business.xml", "Agricultural Policy"),
    src!("ET Health Pharma", "https://health.economictimes.indiatimes.com/rss/pharma", "Healthcare Policy"),
    src!("Express Healthcare", "https://www.expresshealthcare.in/feed/", "Healthcare Policy"),
    src!("India Development Review", "https://idronline.org/feed/", "Social Policy"),
    src!("The Bastion", "https://thebastion.co.in/feed/", "Social Policy"),
    src!("Behanbox", "https://behanbox.com/feed/", "Social Policy"),
    src!("IndiaSpend", "https://www.indiaspend.com/feed/", "Social Policy"),
    src!("Article 14", "https://article-14.com/rss", "Social Policy"),

    // ------------------------------------------------------------------
    // Google News query feeds (routed through the augmentor contract)
    // ------------------------------------------------------------------
    src!("Google News - India Policy", "https://news.google.com/rss/search?q=india+policy+government&hl=en-IN&gl=IN&ceid=IN:en", "Policy News"),
    src!("Google News - Economic Policy", "https://news.google.com/rss/search?q=india+economic+policy+budget+finance&hl=en-IN&gl=IN&ceid=IN:en", "Economic Policy"),
    src!("Google News - Technology Policy", "https://news.google.com/rss/search?q=india+technology+policy+digital&hl=en-IN&gl=IN&ceid=IN:en", "Technology Policy"),
    src!("Google News - Healthcare Policy", "https://news.google.com/rss/search?q=india+healthcare+policy+medical&hl=en-IN&gl=IN&ceid=IN:en", "Healthcare Policy"),
    src!("Google News - Environmental Policy", "https://news.google.com/rss/search?q=india+environment+policy+climate&hl=en-IN&gl=IN&ceid=IN:en", "Environmental Policy"),
    src!("Google News - Education Policy", "https://news.google.com/rss/search?q=india+education+policy+nep&hl=en-IN&gl=IN&ceid=IN:en", "Education Policy"),
    src!("Google News - Agricultural Policy", "https://news.google.com/rss/search?q=india+agriculture+policy+msp&hl=en-IN&gl=IN&ceid=IN:en", "Agricultural Policy"),
    src!("Google News - Defence Policy", "https://news.google.com/rss/search?q=india+defence+policy+security&hl=en-IN&gl=IN&ceid=IN:en", "Defence & Security"),

    // ------------------------------------------------------------------
    // Industry associations and miscellaneous
    // ------------------------------------------------------------------
    src!("NASSCOM Press", "https://nasscom.in/media-press", "Technology Policy"),
    src!("FICCI Press", "https://www.ficci.in/pressreleases.asp", "Economic Policy"),
    src!("CII Press", "https://www.cii.in/PressreleasesList.aspx", "Economic Policy"),
    src!("IAMAI", "https://www.iamai.in/media/press-releases", "Technology Policy"),
    src!("Assocham", "https://www.assocham.org/press-release.php", "Economic Policy"),
    src!("The Quint Law", "https://www.thequint.com/stories.rss?section=law", "Constitutional & Legal"),
    src!("Swarajya Politics", "https://swarajyamag.com/feed", "Governance & Administration"),
    src!("ThePrint Economy", "https://theprint.in/category/economy/feed/", "Economic Policy"),
    src!("Moneylife", "https://www.moneylife.in/rss_feed.html", "Economic Policy"),
    src!("Pragativadi", "https://pragativadi.com/feed/", "Governance & Administration"),
    src!("Sansad TV Updates", "https://sansadtv.nic.in/feed/", "Constitutional & Legal"),
    src!("eGov Magazine", "https://egov.eletsonline.com/feed/", "Governance & Administration"),
    src!("Governance Now", "https://www.governancenow.com/rss.xml", "Governance & Administration"),
    src!("Orissa Post State", "https://www.orissapost.com/feed/", "Governance & Administration"),
    src!("Free Press Journal India", "https://www.freepressjournal.in/stories.rss?section=india", "Governance & Administration"),
    src!("Deccan Chronicle Nation", "https://www.deccanchronicle.com/rss_feed/", "Governance & Administration"),
    src!("Tribune India Nation", "https://www.tribuneindia.com/rss/feed?catId=1345", "Governance & Administration"),
    src!("The Statesman India", "https://www.thestatesman.com/india/feed", "Governance & Administration"),
    src!("Millennium Post", "http://www.millenniumpost.in/feed/", "Governance & Administration"),
    src!("National Herald India", "https://www.nationalheraldindia.com/stories.rss?section=india", "Governance & Administration"),
];
