//! Built-in technology signatures.
//!
//! Patterns are regular expressions matched case-insensitively. A header
//! pattern of `""` matches on the header's presence alone.

/// Declarative description of one technology.
#[derive(Clone, Copy, Debug)]
pub struct SignatureSpec {
    /// Display name, unique across the table.
    pub name: &'static str,
    /// Categories the technology is reported under.
    pub categories: &'static [&'static str],
    /// `(header name, value pattern)` pairs.
    pub headers: &'static [(&'static str, &'static str)],
    /// Patterns matched against the HTML body.
    pub html: &'static [&'static str],
    /// Patterns matched against each `<script src>` value.
    pub scripts: &'static [&'static str],
    /// `(meta name, content pattern)` pairs.
    pub meta: &'static [(&'static str, &'static str)],
    /// Patterns matched against the final URL.
    pub url: &'static [&'static str],
    /// Technologies whose presence this one implies.
    pub implies: &'static [&'static str],
}

const EMPTY: SignatureSpec = SignatureSpec {
    name: "",
    categories: &[],
    headers: &[],
    html: &[],
    scripts: &[],
    meta: &[],
    url: &[],
    implies: &[],
};

/// The default signature table.
pub const BUILTIN: &[SignatureSpec] = &[
    // Web servers
    SignatureSpec {
        name: "Nginx",
        categories: &["web-servers", "reverse-proxies"],
        headers: &[("server", r"nginx")],
        ..EMPTY
    },
    SignatureSpec {
        name: "OpenResty",
        categories: &["web-servers"],
        headers: &[("server", r"openresty")],
        implies: &["Nginx", "Lua"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Apache",
        categories: &["web-servers"],
        headers: &[("server", r"apache(?:$|/|\s)")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Microsoft-IIS",
        categories: &["web-servers"],
        headers: &[("server", r"microsoft-iis")],
        implies: &["Windows Server"],
        ..EMPTY
    },
    SignatureSpec {
        name: "LiteSpeed",
        categories: &["web-servers"],
        headers: &[("server", r"litespeed")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Caddy",
        categories: &["web-servers"],
        headers: &[("server", r"caddy")],
        implies: &["Go"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Envoy",
        categories: &["reverse-proxies"],
        headers: &[("server", r"envoy"), ("x-envoy-upstream-service-time", "")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Google Web Server",
        categories: &["web-servers"],
        headers: &[("server", r"^gws$")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Kestrel",
        categories: &["web-servers"],
        headers: &[("server", r"^kestrel")],
        implies: &["ASP.NET"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Gunicorn",
        categories: &["web-servers"],
        headers: &[("server", r"gunicorn")],
        implies: &["Python"],
        ..EMPTY
    },
    SignatureSpec {
        name: "uvicorn",
        categories: &["web-servers"],
        headers: &[("server", r"uvicorn")],
        implies: &["Python"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Phusion Passenger",
        categories: &["web-servers"],
        headers: &[("server", r"phusion passenger"), ("x-powered-by", r"phusion passenger")],
        ..EMPTY
    },
    // Operating systems
    SignatureSpec {
        name: "Ubuntu",
        categories: &["operating-systems"],
        headers: &[("server", r"ubuntu")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Debian",
        categories: &["operating-systems"],
        headers: &[("server", r"debian")],
        ..EMPTY
    },
    SignatureSpec {
        name: "CentOS",
        categories: &["operating-systems"],
        headers: &[("server", r"centos")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Windows Server",
        categories: &["operating-systems"],
        headers: &[("server", r"win32|win64")],
        ..EMPTY
    },
    // Programming languages
    SignatureSpec {
        name: "PHP",
        categories: &["programming-languages"],
        headers: &[("x-powered-by", r"php"), ("set-cookie", r"phpsessid"), ("server", r"php/")],
        url: &[r"\.php(?:$|\?)"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Python",
        categories: &["programming-languages"],
        headers: &[("server", r"python")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Ruby",
        categories: &["programming-languages"],
        headers: &[("server", r"ruby|mongrel|webrick")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Java",
        categories: &["programming-languages"],
        headers: &[("set-cookie", r"jsessionid"), ("x-powered-by", r"servlet|jsp")],
        url: &[r"\.jsp(?:$|\?)"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Node.js",
        categories: &["programming-languages"],
        headers: &[("x-powered-by", r"node")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Go",
        categories: &["programming-languages"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Lua",
        categories: &["programming-languages"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Perl",
        categories: &["programming-languages"],
        headers: &[("server", r"\bperl\b")],
        url: &[r"\.pl(?:$|\?)"],
        ..EMPTY
    },
    // Web frameworks
    SignatureSpec {
        name: "ASP.NET",
        categories: &["web-frameworks"],
        headers: &[
            ("x-aspnet-version", ""),
            ("x-aspnetmvc-version", ""),
            ("x-powered-by", r"asp\.net"),
            ("set-cookie", r"asp\.net_sessionid"),
        ],
        html: &[r#"<input[^>]+name="__VIEWSTATE""#],
        url: &[r"\.aspx?(?:$|\?)"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Express",
        categories: &["web-frameworks"],
        headers: &[("x-powered-by", r"^express$")],
        implies: &["Node.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Next.js",
        categories: &["web-frameworks", "javascript-frameworks"],
        headers: &[("x-powered-by", r"next\.js")],
        html: &[r#"<script[^>]+id="__NEXT_DATA__""#],
        scripts: &[r"/_next/static/"],
        implies: &["React", "Node.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Nuxt.js",
        categories: &["web-frameworks", "javascript-frameworks"],
        html: &[r"window\.__NUXT__"],
        scripts: &[r"/_nuxt/"],
        implies: &["Vue.js", "Node.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Django",
        categories: &["web-frameworks"],
        headers: &[("set-cookie", r"csrftoken|django")],
        html: &[r#"name="csrfmiddlewaretoken""#],
        implies: &["Python"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Flask",
        categories: &["web-frameworks"],
        headers: &[("server", r"werkzeug")],
        implies: &["Python"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Laravel",
        categories: &["web-frameworks"],
        headers: &[("set-cookie", r"laravel_session")],
        implies: &["PHP"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Ruby on Rails",
        categories: &["web-frameworks"],
        headers: &[("x-powered-by", r"rails"), ("set-cookie", r"_rails_session|_session_id")],
        meta: &[("csrf-param", r"authenticity_token")],
        implies: &["Ruby"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Spring",
        categories: &["web-frameworks"],
        headers: &[("x-application-context", "")],
        implies: &["Java"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Twitter Bootstrap",
        categories: &["web-frameworks"],
        html: &[r#"<link[^>]+bootstrap(?:\.min)?\.css"#],
        scripts: &[r"bootstrap(?:\.bundle)?(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Tailwind CSS",
        categories: &["web-frameworks"],
        scripts: &[r"cdn\.tailwindcss\.com"],
        html: &[r#"<link[^>]+tailwind(?:\.min)?\.css"#],
        ..EMPTY
    },
    // JavaScript frameworks and libraries
    SignatureSpec {
        name: "jQuery",
        categories: &["javascript-frameworks"],
        scripts: &[r"jquery(?:-\d[\d.]*)?(?:\.min)?\.js", r"/jquery/"],
        ..EMPTY
    },
    SignatureSpec {
        name: "jQuery UI",
        categories: &["javascript-frameworks"],
        scripts: &[r"jquery-ui(?:\.min)?\.js", r"/jqueryui/"],
        implies: &["jQuery"],
        ..EMPTY
    },
    SignatureSpec {
        name: "React",
        categories: &["javascript-frameworks"],
        html: &[r"data-reactroot", r"data-reactid"],
        scripts: &[r"react(?:\.production)?(?:\.min)?\.js", r"react-dom"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Vue.js",
        categories: &["javascript-frameworks"],
        html: &[r"data-v-[0-9a-f]{8}", r"<[^>]+\sv-cloak"],
        scripts: &[r"vue(?:\.runtime)?(?:\.global)?(?:\.prod)?(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "AngularJS",
        categories: &["javascript-frameworks"],
        html: &[r"<[^>]+\sng-app"],
        scripts: &[r"angular(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Angular",
        categories: &["javascript-frameworks"],
        html: &[r"<[^>]+\sng-version="],
        ..EMPTY
    },
    SignatureSpec {
        name: "Svelte",
        categories: &["javascript-frameworks"],
        html: &[r#"class="[^"]*svelte-[a-z0-9]+"#],
        ..EMPTY
    },
    SignatureSpec {
        name: "Alpine.js",
        categories: &["javascript-frameworks"],
        html: &[r"<[^>]+\sx-data"],
        scripts: &[r"alpine(?:js)?(?:\.min)?\.js", r"/alpinejs"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Ember.js",
        categories: &["javascript-frameworks"],
        scripts: &[r"ember(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Backbone.js",
        categories: &["javascript-frameworks"],
        scripts: &[r"backbone(?:-min|\.min)?\.js"],
        implies: &["Underscore.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Underscore.js",
        categories: &["javascript-frameworks"],
        scripts: &[r"underscore(?:-min|\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Lodash",
        categories: &["javascript-frameworks"],
        scripts: &[r"lodash(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Modernizr",
        categories: &["javascript-frameworks"],
        scripts: &[r"modernizr"],
        ..EMPTY
    },
    SignatureSpec {
        name: "RequireJS",
        categories: &["javascript-frameworks"],
        scripts: &[r"require(?:\.min)?\.js"],
        ..EMPTY
    },
    // Graphics
    SignatureSpec {
        name: "D3",
        categories: &["javascript-graphics"],
        scripts: &[r"/d3(?:\.v\d)?(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Chart.js",
        categories: &["javascript-graphics"],
        scripts: &[r"chart(?:\.umd)?(?:\.min)?\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Three.js",
        categories: &["javascript-graphics"],
        scripts: &[r"three(?:\.module)?(?:\.min)?\.js"],
        ..EMPTY
    },
    // CMS and blogs
    SignatureSpec {
        name: "WordPress",
        categories: &["cms", "blogs"],
        html: &[r"/wp-content/", r"/wp-includes/"],
        meta: &[("generator", r"wordpress")],
        headers: &[("link", r"rel=.https://api\.w\.org/"), ("x-pingback", r"xmlrpc\.php")],
        implies: &["PHP"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Drupal",
        categories: &["cms"],
        headers: &[("x-drupal-cache", ""), ("x-generator", r"drupal")],
        html: &[r"/sites/(?:default|all)/(?:themes|modules)/", r"drupal-settings-json"],
        meta: &[("generator", r"drupal")],
        implies: &["PHP"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Joomla",
        categories: &["cms"],
        meta: &[("generator", r"joomla")],
        html: &[r"/media/jui/", r"/components/com_"],
        implies: &["PHP"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Ghost",
        categories: &["cms", "blogs"],
        meta: &[("generator", r"ghost")],
        headers: &[("x-ghost-cache-status", "")],
        implies: &["Node.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Hugo",
        categories: &["cms", "blogs"],
        meta: &[("generator", r"hugo")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Jekyll",
        categories: &["cms", "blogs"],
        meta: &[("generator", r"jekyll")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Wix",
        categories: &["cms"],
        headers: &[("x-wix-request-id", "")],
        meta: &[("generator", r"wix\.com")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Squarespace",
        categories: &["cms"],
        html: &[r"static\.squarespace\.com", r"Static\.SQUARESPACE_CONTEXT"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Webflow",
        categories: &["cms"],
        meta: &[("generator", r"webflow")],
        html: &[r"data-wf-page="],
        ..EMPTY
    },
    SignatureSpec {
        name: "Blogger",
        categories: &["blogs"],
        meta: &[("generator", r"blogger")],
        url: &[r"\.blogspot\.com"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Medium",
        categories: &["blogs"],
        url: &[r"^https?://(?:[^/]+\.)?medium\.com"],
        ..EMPTY
    },
    // E-commerce
    SignatureSpec {
        name: "Shopify",
        categories: &["ecommerce"],
        headers: &[("x-shopid", ""), ("x-shopify-stage", ""), ("set-cookie", r"_shopify_")],
        html: &[r"cdn\.shopify\.com", r"Shopify\.theme"],
        ..EMPTY
    },
    SignatureSpec {
        name: "WooCommerce",
        categories: &["ecommerce"],
        html: &[r"/wp-content/plugins/woocommerce/", r"woocommerce-no-js"],
        implies: &["WordPress"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Magento",
        categories: &["ecommerce"],
        headers: &[("set-cookie", r"frontend=|mage-cache")],
        html: &[r"Mage\.Cookies", r"/static/version\d+/frontend/"],
        implies: &["PHP"],
        ..EMPTY
    },
    SignatureSpec {
        name: "PrestaShop",
        categories: &["ecommerce"],
        meta: &[("generator", r"prestashop")],
        headers: &[("powered-by", r"prestashop")],
        implies: &["PHP"],
        ..EMPTY
    },
    SignatureSpec {
        name: "BigCommerce",
        categories: &["ecommerce"],
        html: &[r"cdn\d*\.bigcommerce\.com"],
        ..EMPTY
    },
    // Analytics and tag managers
    SignatureSpec {
        name: "Google Analytics",
        categories: &["analytics"],
        scripts: &[r"google-analytics\.com/(?:ga|urchin|analytics)\.js", r"googletagmanager\.com/gtag/js"],
        html: &[r"\bgtag\(\s*['\x22]config['\x22]", r"GoogleAnalyticsObject"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Google Tag Manager",
        categories: &["tag-managers"],
        scripts: &[r"googletagmanager\.com/gtm\.js"],
        html: &[r"googletagmanager\.com/ns\.html", r"googletagmanager\.com/gtm\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Matomo",
        categories: &["analytics"],
        scripts: &[r"(?:piwik|matomo)\.js"],
        html: &[r"_paq\.push"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Plausible",
        categories: &["analytics"],
        scripts: &[r"plausible\.io/js/"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Hotjar",
        categories: &["analytics"],
        scripts: &[r"static\.hotjar\.com"],
        html: &[r"static\.hotjar\.com", r"hjSiteSettings"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Segment",
        categories: &["analytics"],
        scripts: &[r"cdn\.segment\.(?:com|io)/analytics\.js"],
        html: &[r"cdn\.segment\.(?:com|io)/analytics\.js"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Facebook Pixel",
        categories: &["analytics", "advertising-networks"],
        scripts: &[r"connect\.facebook\.net/[^/]+/fbevents\.js"],
        html: &[r"connect\.facebook\.net/[^/]+/fbevents\.js", r"fbq\(\s*['\x22]init"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Cloudflare Web Analytics",
        categories: &["analytics"],
        scripts: &[r"static\.cloudflareinsights\.com/beacon"],
        ..EMPTY
    },
    // Advertising
    SignatureSpec {
        name: "Google AdSense",
        categories: &["advertising-networks"],
        scripts: &[r"pagead2\.googlesyndication\.com"],
        html: &[r"adsbygoogle"],
        ..EMPTY
    },
    SignatureSpec {
        name: "DoubleClick",
        categories: &["advertising-networks"],
        scripts: &[r"doubleclick\.net", r"googletagservices\.com/tag/js/gpt\.js"],
        ..EMPTY
    },
    // Marketing automation and widgets
    SignatureSpec {
        name: "HubSpot",
        categories: &["marketing-automation"],
        scripts: &[r"js\.hs-scripts\.com", r"js\.hsforms\.net"],
        html: &[r"js\.hs-scripts\.com"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Mailchimp",
        categories: &["marketing-automation"],
        scripts: &[r"chimpstatic\.com", r"list-manage\.com"],
        html: &[r"list-manage\.com/subscribe"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Intercom",
        categories: &["widgets"],
        scripts: &[r"widget\.intercom\.io", r"js\.intercomcdn\.com"],
        html: &[r"widget\.intercom\.io"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Zendesk",
        categories: &["widgets"],
        scripts: &[r"static\.zdassets\.com"],
        ..EMPTY
    },
    SignatureSpec {
        name: "reCAPTCHA",
        categories: &["widgets"],
        scripts: &[r"google\.com/recaptcha/", r"recaptcha/api\.js"],
        html: &[r"g-recaptcha"],
        ..EMPTY
    },
    // Fonts
    SignatureSpec {
        name: "Google Font API",
        categories: &["font-scripts"],
        html: &[r"fonts\.googleapis\.com"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Font Awesome",
        categories: &["font-scripts"],
        html: &[r"font-?awesome(?:\.min)?\.css", r"use\.fontawesome\.com", r"kit\.fontawesome\.com"],
        scripts: &[r"kit\.fontawesome\.com", r"fontawesome"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Adobe Fonts",
        categories: &["font-scripts"],
        html: &[r"use\.typekit\.net"],
        scripts: &[r"use\.typekit\.net"],
        ..EMPTY
    },
    // CDN and caching
    SignatureSpec {
        name: "Cloudflare",
        categories: &["cdn"],
        headers: &[("server", r"^cloudflare$"), ("cf-ray", ""), ("cf-cache-status", "")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Amazon CloudFront",
        categories: &["cdn"],
        headers: &[("x-amz-cf-id", ""), ("via", r"cloudfront")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Fastly",
        categories: &["cdn"],
        headers: &[("x-fastly-request-id", ""), ("fastly-debug-digest", ""), ("x-served-by", r"cache-[a-z]{3}\d+")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Akamai",
        categories: &["cdn"],
        headers: &[("x-akamai-transformed", ""), ("server", r"akamaighost")],
        ..EMPTY
    },
    SignatureSpec {
        name: "jsDelivr",
        categories: &["cdn"],
        scripts: &[r"cdn\.jsdelivr\.net"],
        html: &[r#"<link[^>]+cdn\.jsdelivr\.net"#],
        ..EMPTY
    },
    SignatureSpec {
        name: "cdnjs",
        categories: &["cdn"],
        scripts: &[r"cdnjs\.cloudflare\.com"],
        html: &[r#"<link[^>]+cdnjs\.cloudflare\.com"#],
        ..EMPTY
    },
    SignatureSpec {
        name: "unpkg",
        categories: &["cdn"],
        scripts: &[r"unpkg\.com"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Vercel",
        categories: &["cdn"],
        headers: &[("server", r"^vercel$"), ("x-vercel-id", ""), ("x-vercel-cache", "")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Netlify",
        categories: &["cdn"],
        headers: &[("server", r"^netlify$"), ("x-nf-request-id", "")],
        ..EMPTY
    },
    SignatureSpec {
        name: "GitHub Pages",
        categories: &["cdn"],
        headers: &[("server", r"^github\.com$")],
        url: &[r"^https?://[^/]+\.github\.io"],
        ..EMPTY
    },
    SignatureSpec {
        name: "Varnish",
        categories: &["caching"],
        headers: &[("via", r"varnish"), ("x-varnish", "")],
        ..EMPTY
    },
    SignatureSpec {
        name: "Squid",
        categories: &["caching"],
        headers: &[("via", r"squid"), ("x-cache", r"squid")],
        ..EMPTY
    },
];
