//! Plaintext copy of the catalog, used to check the encoded data.

pub const PLAIN_LISTS: &[(&str, &[&str])] = &[
    (
        "abpIndo",
        &[
            "#Iklan-Melayang",
            "#Kolom-Iklan-728",
            "#SidebarIklan-wrapper",
            r#"a[title="7naga poker" i]"#,
            r#"[title="ALIENBOLA" i]"#,
        ],
    ),
    (
        "abpvn",
        &[
            "#quangcaomb",
            ".i-said-no-thing-can-stop-me-warning.dark",
            ".quangcao",
            r#"[href^="https://r88.vn/"]"#,
            r#"[href^="https://zbet.vn/"]"#,
        ],
    ),
    (
        "adBlockFinland",
        &[
            ".mainostila",
            ".sponsorit",
            ".ylamainos",
            r#"a[href*="/clickthrgh.asp?"]"#,
            r#"a[href^="https://app.readpeak.com/ads"]"#,
        ],
    ),
    (
        "adBlockPersian",
        &[
            "#navbar_notice_50",
            r#"a[href^="https://iqoption.com/lp/mobile-partner/?aff="]"#,
            ".kadr",
            r#"TABLE[width="140px"]"#,
            "#divAgahi",
        ],
    ),
    (
        "adBlockWarningRemoval",
        &[
            "#adblock_message",
            ".adblockInfo",
            ".deadblocker-header-bar",
            ".no-ad-reminder",
            "#AdBlockDialog",
        ],
    ),
    (
        "adGuardAnnoyances",
        &[
            r#"amp-embed[type="zen"]"#,
            ".hs-sosyal",
            "#cookieconsentdiv",
            r#"div[class^="app_gdpr"]"#,
            ".as-oil",
        ],
    ),
    (
        "adGuardBase",
        &[
            "#gads_middle",
            ".tjads",
            ".BetterJsPopOverlay",
            "#ad_300X250",
            "#bannerfloat22",
        ],
    ),
    (
        "adGuardChinese",
        &[
            r#"a[href*=".123ch.cn"]"#,
            r#"a[href*=".ttz5.cn"]"#,
            r#"a[href*=".yabovip2027.com/"]"#,
            ".tm3all2h4b",
            "#j-new-ad",
        ],
    ),
    (
        "adGuardFrench",
        &[
            "#div_banniere_pub",
            r#"a[href^="https://secure.securitetotale.fr/"]"#,
            r#"a[href*="fducks.com/"]"#,
            r#"a[href^="http://frtyd.com/"]"#,
            ".publicite1",
        ],
    ),
    (
        "adGuardGerman",
        &[
            ".banneritemwerbung_head_1",
            ".boxstartwerbung",
            ".werbung3",
            r#"a[href^="http://www.ichwuerde.com/?ref="]"#,
            r#"a[href^="http://partners.adklick.de/tracking.php?"]"#,
        ],
    ),
    (
        "adGuardJapanese",
        &[
            ".ad-text-blockA01",
            "._popIn_infinite_video",
            "[class^=blogroll_wrapper]",
            r#"a[href^="http://ad2.trafficgate.net/"]"#,
            r#"a[href^="http://www.rssad.jp/"]"#,
        ],
    ),
    (
        "adGuardMobile",
        &[
            "amp-auto-ads",
            "#mgid_iframe",
            ".amp_ad",
            "amp-sticky-ad",
            ".plugin-blogroll",
        ],
    ),
    (
        "adGuardRussian",
        &[
            r#"a[href^="https://ya-distrib.ru/r/"]"#,
            r#"[onclick*=".twkv.ru"]"#,
            ".reclama",
            r#"div[id^="smi2adblock"]"#,
            r#"div[id^="AdFox_banner_"]"#,
        ],
    ),
    (
        "adGuardSocial",
        &[
            r#"a[href^="//www.stumbleupon.com/submit?url="]"#,
            r#"a[href^="//telegram.me/share/url?"]"#,
            ".etsy-tweet",
            "#inlineShare",
            ".popup-social",
        ],
    ),
    (
        "adGuardSpanishPortuguese",
        &[
            "#barraPublicidade",
            "#Publicidade",
            "#publiEspecial",
            "#queTooltip",
            r#"[href^="http://ads.glispa.com/"]"#,
        ],
    ),
    (
        "adGuardTrackingProtection",
        &[
            r#"amp-embed[type="taboola"]"#,
            "#qoo-counter",
            r#"a[href^="http://click.hotlog.ru/"]"#,
            r#"a[href^="http://hitcounter.ru/top/stat.php"]"#,
            r#"a[href^="http://top.mail.ru/jump"]"#,
        ],
    ),
    (
        "adGuardTurkish",
        &[
            "#backkapat",
            "#reklami",
            r#"a[href^="http://adserv.ontek.com.tr/"]"#,
            r#"a[href^="http://izlenzi.com/campaign/"]"#,
            r#"a[href^="http://www.installads.net/"]"#,
        ],
    ),
    (
        "bulgarian",
        &[
            "td#freenet_table_ads",
            "#newAd",
            "#ea_intext_div",
            ".lapni-pop-over",
            "#xenium_hot_offers",
        ],
    ),
    (
        "easyList",
        &[
            r#"[lazy-ad="leftthin_banner"]"#,
            "#ad_300x250_2",
            "#interstitialAd",
            "#wide_ad_unit",
            ".showcaseAd",
        ],
    ),
    (
        "easyListChina",
        &[
            r#"a[href*=".wensixuetang.com/"]"#,
            r#"A[href*="/hth107.com/"]"#,
            r#".appguide-wrap[onclick*="bcebos.com"]"#,
            ".frontpageAdvM",
            "#taotaole",
        ],
    ),
    (
        "easyListCookie",
        &[
            "#CookieEU",
            "#__cookies_",
            "#les_cookies",
            ".asset_balaNotification",
            ".gdpr-tab",
        ],
    ),
    (
        "easyListCzechSlovak",
        &[
            "#onlajny-stickers",
            "#reklamni-box",
            ".reklama-megaboard",
            ".sklik",
            r#"[id^="sklikReklama"]"#,
        ],
    ),
    (
        "easyListDutch",
        &[
            "#advertentie",
            "#vipAdmarktBannerBlock",
            ".adstekst",
            r#"a[href^="http://adserver.webads.nl/adclick/"]"#,
            "#semilo-lrectangle",
        ],
    ),
    (
        "easyListGermany",
        &[
            "#LxWerbeteaser",
            r#"a[href^="http://www.kontakt-vermittler.de/?wm="]"#,
            ".werbung301",
            ".ads_bueroklammer",
            "#Werbung_Sky",
        ],
    ),
    (
        "easyListItaly",
        &[
            ".box_adv_annunci",
            ".sb-box-pubbliredazionale",
            r#"a[href^="http://affiliazioniads.snai.it/"]"#,
            r#"a[href^="https://adserver.html.it/"]"#,
            r#"a[href^="https://affiliazioniads.snai.it/"]"#,
        ],
    ),
    (
        "easyListLithuania",
        &[
            ".reklamos_tarpas",
            ".reklamos_nuorodos",
            r#"img[alt="Reklaminis skydelis"]"#,
            r#"img[alt="Dedikuoti.lt serveriai"]"#,
            r#"img[alt="Hostingas Serveriai.lt"]"#,
        ],
    ),
    (
        "estonian",
        &[
            r#"A[href*="http://pay4results24.eu"]"#,
        ],
    ),
    (
        "fanboyAnnoyances",
        &[
            "#feedback-tab",
            "#taboola-below-article",
            ".feedburnerFeedBlock",
            ".widget-feedburner-counter",
            r#"[title="Subscribe to our blog"]"#,
        ],
    ),
    (
        "fanboyAntiFacebook",
        &[
            ".util-bar-module-firefly-visible",
        ],
    ),
    (
        "fanboyEnhancedTrackers",
        &[
            ".open.pushModal",
            "#issuem-leaky-paywall-articles-zero-remaining-nag",
            r#"div[style*="box-shadow: rgb(136, 136, 136) 0px 0px 12px; color: "]"#,
            r#"div[class$="-hide"][zoompage-fontsize][style="display: block;"]"#,
            ".BlockNag__Card",
        ],
    ),
    (
        "fanboySocial",
        &[
            ".td-tags-and-social-wrapper-box",
            ".twitterContainer",
            ".youtube-social",
            r#"a[title^="Like us on Facebook"]"#,
            r#"img[alt^="Share on Digg"]"#,
        ],
    ),
    (
        "frellwitSwedish",
        &[
            r#"a[href*="casinopro.se"][target="_blank"]"#,
            r#"a[href*="doktor-se.onelink.me"]"#,
            "article.category-samarbete",
            "div.holidAds",
            "ul.adsmodern",
        ],
    ),
    (
        "greekAdBlock",
        &[
            r#"A[href*="adman.otenet.gr/click?"]"#,
            r#"A[href*="http://axiabanners.exodus.gr/"]"#,
            r#"A[href*="http://interactive.forthnet.gr/click?"]"#,
            "DIV.agores300",
            "TABLE.advright",
        ],
    ),
    (
        "hungarian",
        &[
            r#"A[href*="ad.eval.hu"]"#,
            r#"A[href*="ad.netmedia.hu"]"#,
            r#"A[href*="daserver.ultraweb.hu"]"#,
            "#cemp_doboz",
            ".optimonk-iframe-container",
        ],
    ),
    (
        "iDontCareAboutCookies",
        &[
            r#".alert-info[data-block-track*="CookieNotice"]"#,
            ".ModuleTemplateCookieIndicator",
            ".o--cookies--container",
            ".cookie-msg-info-container",
            "#cookies-policy-sticky",
        ],
    ),
    (
        "icelandicAbp",
        &[
            r#"A[href^="/framework/resources/forms/ads.aspx"]"#,
        ],
    ),
    (
        "latvian",
        &[
            r#"a[href="http://www.salidzini.lv/"][style="display: block; width: 120px; height: 40px; overflow: hidden; position: relative;"]"#,
            r#"a[href="http://www.salidzini.lv/"][style="display: block; width: 88px; height: 31px; overflow: hidden; position: relative;"]"#,
        ],
    ),
    (
        "listKr",
        &[
            r#"a[href*="//kingtoon.slnk.kr"]"#,
            r#"a[href*="//playdsb.com/kr"]"#,
            "div.logly-lift-adz",
            r#"div[data-widget_id="ml6EJ074"]"#,
            "ins.daum_ddn_area",
        ],
    ),
    (
        "listeAr",
        &[
            ".geminiLB1Ad",
            ".right-and-left-sponsers",
            r#"a[href*=".aflam.info"]"#,
            r#"a[href*="booraq.org"]"#,
            r#"a[href*="dubizzle.com/ar/?utm_source="]"#,
        ],
    ),
    (
        "listeFr",
        &[
            r#"a[href^="http://promo.vador.com/"]"#,
            "#adcontainer_recherche",
            r#"a[href*="weborama.fr/fcgi-bin/"]"#,
            ".site-pub-interstitiel",
            r#"div[id^="crt-"][data-criteo-id]"#,
        ],
    ),
    (
        "officialPolish",
        &[
            "#ceneo-placeholder-ceneo-12",
            r#"[href^="https://aff.sendhub.pl/"]"#,
            r#"a[href^="http://advmanager.techfun.pl/redirect/"]"#,
            r#"a[href^="http://www.trizer.pl/?utm_source"]"#,
            "div#skapiec_ad",
        ],
    ),
    (
        "ro",
        &[
            r#"a[href^="//afftrk.altex.ro/Counter/Click"]"#,
            r#"a[href^="/magazin/"]"#,
            r#"a[href^="https://blackfridaysales.ro/trk/shop/"]"#,
            r#"a[href^="https://event.2performant.com/events/click"]"#,
            r#"a[href^="https://l.profitshare.ro/"]"#,
        ],
    ),
    (
        "ruAd",
        &[
            r#"a[href*="//febrare.ru/"]"#,
            r#"a[href*="//utimg.ru/"]"#,
            r#"a[href*="://chikidiki.ru"]"#,
            "#pgeldiz",
            ".yandex-rtb-block",
        ],
    ),
    (
        "thaiAds",
        &[
            "a[href*=macau-uta-popup]",
            "#ads-google-middle_rectangle-group",
            ".ads300s",
            ".bumq",
            ".img-kosana",
        ],
    ),
    (
        "webAnnoyancesUltralist",
        &[
            "#mod-social-share-2",
            "#social-tools",
            ".ctpl-fullbanner",
            ".zergnet-recommend",
            ".yt.btn-link.btn-md.btn",
        ],
    ),
];
