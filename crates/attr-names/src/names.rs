//! Generated table of pre-allocated attribute names.
//!
//! One row per well-known attribute name, sorted ascending by the name's
//! fingerprint so that `ATTRIBUTE_HASHES` can be binary-searched. The row at
//! a given index in `ATTRIBUTE_NAMES` corresponds to the fingerprint at the
//! same index in `ATTRIBUTE_HASHES`.
//!
//! This file is a build artifact ported from the HTML5 attribute table; a
//! handful of entries carry a literal trailing space in their local name,
//! preserved as-is. Do not edit by hand and do not extend without
//! re-verifying fingerprint uniqueness (see the tests in `attribute_name`).

use crate::attribute_name::{AttributeName, XLINK_NAMESPACE, XML_NAMESPACE};

#[rustfmt::skip]
pub(crate) static ATTRIBUTE_HASHES: [i32; 581] = [
    1153, 1383, 1601, 1793, 1827, 1857, 68600, 69146,
    69177, 70237, 70270, 71572, 71669, 72415, 72444, 74846,
    74904, 74943, 75001, 75276, 75590, 84742, 84839, 85575,
    85963, 85992, 87204, 88074, 88171, 89130, 89163, 3207892,
    3283895, 3284791, 3338752, 3358197, 3369562, 3539124, 3562402, 3574260,
    3670335, 3696933, 3721879, 135280021, 135346322, 136317019, 136475749, 136548517,
    136652214, 136884919, 136902418, 136942992, 137292068, 139120259, 139785574, 142250603,
    142314056, 142331176, 142519584, 144752417, 145106895, 146147200, 146765926, 148805544,
    149655723, 149809441, 150018784, 150445028, 150923321, 152528754, 152536216, 152647366,
    152962785, 155219321, 155654904, 157317483, 157350248, 157437941, 157447478, 157604838,
    157685404, 157894402, 158315188, 166078431, 169409980, 169700259, 169856932, 170007032,
    170409695, 170466488, 170513710, 170608367, 173028944, 173896963, 176090625, 176129212,
    179390001, 179489057, 179627464, 179840468, 179849042, 180004216, 181779081, 183027151,
    183645319, 183698797, 185922012, 185997252, 188312483, 188675799, 190977533, 190992569,
    191006194, 191033518, 191038774, 191096249, 191166163, 191194426, 191522106, 191568039,
    200104642, 202506661, 202537381, 202602917, 203070590, 203120766, 203389054, 203690071,
    203971238, 203986524, 209040857, 209125756, 212055489, 212322418, 212746849, 213002877,
    213055164, 213088023, 213259873, 213273386, 213435118, 213437318, 213438231, 213493071,
    213532268, 213542834, 213584431, 213659891, 215285828, 215880731, 216112976, 216684637,
    217369699, 217565298, 217576549, 218186795, 219743185, 220082234, 221623802, 221986406,
    222283890, 223089542, 223138630, 223311265, 224547358, 224587256, 224589550, 224655650,
    224785518, 224810917, 224813302, 225429618, 225432950, 225440869, 236107233, 236709921,
    236838947, 237117095, 237143271, 237172455, 237209953, 237354143, 237372743, 237668065,
    237703073, 237714273, 239743521, 240512803, 240522627, 240560417, 240656513, 241015715,
    241062755, 241065383, 243523041, 245865199, 246261793, 246556195, 246774817, 246923491,
    246928419, 246981667, 247014847, 247058369, 247112833, 247118177, 247119137, 247128739,
    247316903, 249533729, 250235623, 250269543, 251402351, 252339047, 253260911, 253293679,
    254844367, 255547879, 256077281, 256345377, 258124199, 258354465, 258605063, 258744193,
    258845603, 258856961, 258926689, 270174334, 270709417, 270778994, 270781796, 271478858,
    271490090, 272870654, 273335275, 273369140, 273924313, 274108530, 274116736, 276818662,
    277476156, 278205908, 279156579, 279349675, 280108533, 280128712, 280132869, 280162403,
    280280292, 280413430, 280506130, 280677397, 280678580, 280686710, 280689066, 282736758,
    283110901, 283275116, 283823226, 283890012, 284479340, 284606461, 286700477, 286798916,
    291557706, 291665349, 291804100, 292138018, 292166446, 292418738, 292451039, 300298041,
    300374839, 300597935, 302075482, 303073389, 303083839, 303266673, 303354997, 303724281,
    303819694, 304242723, 304382625, 306247792, 307227811, 307468786, 307724489, 309671175,
    310252031, 310358241, 310373094, 311015256, 313357609, 313683893, 313701861, 313706996,
    313707317, 313710350, 314027746, 314038181, 314091299, 314205627, 314233813, 316741830,
    316797986, 317486755, 317794164, 320076137, 322657125, 322887778, 323506876, 323572412,
    323605180, 325060058, 325320188, 325398738, 325541490, 325671619, 333866609, 333868843,
    335100592, 335107319, 336806130, 337212108, 337282686, 337285434, 337585223, 338036037,
    338298087, 338566051, 340943551, 341190970, 342995704, 343352124, 343912673, 344585053,
    345331280, 346325327, 346977248, 347218098, 347262163, 347278576, 347438191, 347655959,
    347684788, 347726430, 347727772, 347776035, 347776629, 349500753, 350880161, 350887073,
    353384123, 355496998, 355906922, 355979793, 356545959, 358637867, 358905016, 359164318,
    359247286, 359350571, 359579447, 365560330, 367399355, 367420285, 367510727, 368013212,
    370234760, 370353345, 370710317, 371122285, 371194213, 371448425, 371448430, 371545055,
    371596922, 371758751, 371964792, 372151328, 376550136, 376710172, 376795771, 376826271,
    376906556, 380514830, 380774774, 380775037, 381030322, 381136500, 381281631, 381282269,
    381285504, 381330595, 381331422, 381335911, 381336484, 383907298, 383917408, 384595009,
    384595013, 387799894, 387823201, 392581647, 392584937, 392742684, 392906485, 393003349,
    400644707, 400973830, 402197030, 404469244, 404478897, 404694860, 406887479, 408294949,
    408789955, 410022510, 410467324, 410586448, 410945965, 411845275, 414327152, 414327932,
    414329781, 414346257, 414346439, 414639928, 414835998, 414894517, 414986533, 417465377,
    417465381, 417492216, 418259232, 419310946, 420103495, 420242342, 420380455, 420658662,
    420717432, 423183880, 424539259, 425929170, 425972964, 426050649, 426126450, 426142833,
    426607922, 435757609, 435757617, 435757998, 437289840, 437347469, 437412335, 437423943,
    437455540, 437462252, 437597991, 437617485, 437986507, 438015591, 438034813, 438038966,
    438179623, 438347971, 438483573, 438547062, 438895551, 441592676, 442032555, 443548979,
    447881379, 447881655, 447881895, 447887844, 448416189, 448445746, 448449012, 450942191,
    452816744, 453668677, 454434495, 456610076, 456642844, 456738709, 457544600, 459451897,
    459680944, 468058810, 468083581, 469312038, 469312046, 469312054, 470964084, 471470955,
    471567278, 472267822, 481177859, 481210627, 481435874, 481455115, 481485378, 481490218,
    485105638, 486005878, 486383494, 487988916, 488103783, 490661867, 491574090, 491578272,
    493041952, 493441205, 493582844, 493716979, 504577572, 504740359, 505091638, 505592418,
    505656212, 509516275, 514998531, 515571132, 515594682, 518712698, 521362273, 526592419,
    526807354, 527348842, 538294791, 539214049, 544689535, 545535009, 548544752, 548563346,
    548595116, 551679010, 558034099, 560329411, 560356209, 560671018, 560671152, 560692590,
    560845442, 569212097, 569474241, 572252718, 572768481, 575326764, 576174758, 576190819,
    582099184, 582099438, 582372519, 582558889, 586552164, 591325418, 594231990, 594243961,
    605711268, 615672071, 616086845, 621792370, 624879850, 627432831, 640040548, 654392808,
    658675477, 659420283, 672891587, 694768102, 705890982, 725543146, 759097578, 761686526,
    795383908, 843809551, 878105336, 908643300, 945213471,
];

#[rustfmt::skip]
pub(crate) static ATTRIBUTE_NAMES: [AttributeName; 581] = [
    AttributeName::of("d"),
    AttributeName::of("k"),
    AttributeName::of("r"),
    AttributeName::of("x"),
    AttributeName::of("y"),
    AttributeName::of("z"),
    AttributeName::of("by"),
    AttributeName::of("cx"),
    AttributeName::of("cy"),
    AttributeName::of("dx"),
    AttributeName::of("dy"),
    AttributeName::of("g2"),
    AttributeName::of("g1"),
    AttributeName::of("fx"),
    AttributeName::of("fy"),
    AttributeName::of("k4"),
    AttributeName::of("k2"),
    AttributeName::of("k3"),
    AttributeName::of("k1"),
    AttributeName::id(),
    AttributeName::of("in"),
    AttributeName::of("u2"),
    AttributeName::of("u1"),
    AttributeName::of("rt"),
    AttributeName::of("rx"),
    AttributeName::of("ry"),
    AttributeName::of("to"),
    AttributeName::of("y2"),
    AttributeName::of("y1"),
    AttributeName::of("x1"),
    AttributeName::of("x2"),
    AttributeName::of("alt"),
    AttributeName::of("dir"),
    AttributeName::of("dur"),
    AttributeName::of("end"),
    AttributeName::of("for"),
    AttributeName::of("in2"),
    AttributeName::of("max"),
    AttributeName::of("min"),
    AttributeName::of("low"),
    AttributeName::of("rel"),
    AttributeName::of("rev"),
    AttributeName::of("src"),
    AttributeName::of("axis"),
    AttributeName::of("abbr"),
    AttributeName::of("bbox"),
    AttributeName::of("cite"),
    AttributeName::of("code"),
    AttributeName::of("bias"),
    AttributeName::of("cols"),
    AttributeName::of("clip"),
    AttributeName::of("char"),
    AttributeName::of("base"),
    AttributeName::of("edge"),
    AttributeName::of("data"),
    AttributeName::of("fill"),
    AttributeName::of("from"),
    AttributeName::of("form"),
    AttributeName::of("face"),
    AttributeName::of("high"),
    AttributeName::of("href"),
    AttributeName::of("open"),
    AttributeName::of("icon"),
    AttributeName::of("name"),
    AttributeName::of("mode"),
    AttributeName::of("mask"),
    AttributeName::of("link"),
    AttributeName::foreign_lang(),
    AttributeName::of("list"),
    AttributeName::of("type"),
    AttributeName::of("when"),
    AttributeName::of("wrap"),
    AttributeName::of("text"),
    AttributeName::of("path"),
    AttributeName::of("ping"),
    AttributeName::svg_camel("refx", "refX"),
    AttributeName::svg_camel("refy", "refY"),
    AttributeName::of("size"),
    AttributeName::of("seed"),
    AttributeName::of("rows"),
    AttributeName::of("span"),
    AttributeName::of("step"),
    AttributeName::of("role"),
    AttributeName::of("xref"),
    AttributeName::of("async"),
    AttributeName::of("alink"),
    AttributeName::of("align"),
    AttributeName::of("close"),
    AttributeName::of("color"),
    AttributeName::of("class"),
    AttributeName::of("clear"),
    AttributeName::of("begin"),
    AttributeName::of("depth"),
    AttributeName::of("defer"),
    AttributeName::of("fence"),
    AttributeName::of("frame"),
    AttributeName::of("ismap"),
    AttributeName::of("onend"),
    AttributeName::of("index"),
    AttributeName::of("order"),
    AttributeName::of("other"),
    AttributeName::of("oncut"),
    AttributeName::of("nargs"),
    AttributeName::of("media"),
    AttributeName::of("label"),
    AttributeName::of("local"),
    AttributeName::of("width"),
    AttributeName::of("title"),
    AttributeName::of("vlink"),
    AttributeName::of("value"),
    AttributeName::of("slope"),
    AttributeName::of("shape"),
    AttributeName::of("scope"),
    AttributeName::of("scale"),
    AttributeName::of("speed"),
    AttributeName::of("style"),
    AttributeName::of("rules"),
    AttributeName::of("stemh"),
    AttributeName::of("stemv"),
    AttributeName::of("start"),
    AttributeName::xmlns_declaration(),
    AttributeName::of("accept"),
    AttributeName::of("accent"),
    AttributeName::of("ascent"),
    AttributeName::of("active"),
    AttributeName::of("altimg"),
    AttributeName::of("action"),
    AttributeName::of("border"),
    AttributeName::of("cursor"),
    AttributeName::of("coords"),
    AttributeName::of("filter"),
    AttributeName::of("format"),
    AttributeName::of("hidden"),
    AttributeName::of("hspace"),
    AttributeName::of("height"),
    AttributeName::of("onmove"),
    AttributeName::of("onload"),
    AttributeName::of("ondrag"),
    AttributeName::of("origin"),
    AttributeName::of("onzoom"),
    AttributeName::of("onhelp"),
    AttributeName::of("onstop"),
    AttributeName::of("ondrop"),
    AttributeName::of("onblur"),
    AttributeName::of("object"),
    AttributeName::of("offset"),
    AttributeName::of("orient"),
    AttributeName::of("oncopy"),
    AttributeName::of("nowrap"),
    AttributeName::of("nohref"),
    AttributeName::of("macros"),
    AttributeName::of("method"),
    AttributeName::of("lowsrc"),
    AttributeName::of("lspace"),
    AttributeName::of("lquote"),
    AttributeName::of("usemap"),
    AttributeName::of("widths"),
    AttributeName::of("target"),
    AttributeName::of("values"),
    AttributeName::of("valign"),
    AttributeName::of("vspace"),
    AttributeName::of("poster"),
    AttributeName::of("points"),
    AttributeName::of("prompt"),
    AttributeName::of("scoped"),
    AttributeName::of("string"),
    AttributeName::of("scheme"),
    AttributeName::of("stroke"),
    AttributeName::of("radius"),
    AttributeName::of("result"),
    AttributeName::of("repeat"),
    AttributeName::of("rspace"),
    AttributeName::of("rotate"),
    AttributeName::of("rquote"),
    AttributeName::of("alttext"),
    AttributeName::of("archive"),
    AttributeName::of("azimuth"),
    AttributeName::of("closure"),
    AttributeName::of("checked"),
    AttributeName::of("classid"),
    AttributeName::of("charoff"),
    AttributeName::of("bgcolor"),
    AttributeName::of("colspan"),
    AttributeName::of("charset"),
    AttributeName::of("compact"),
    AttributeName::of("content"),
    AttributeName::of("enctype"),
    AttributeName::of("datasrc"),
    AttributeName::of("datafld"),
    AttributeName::of("declare"),
    AttributeName::of("display"),
    AttributeName::of("divisor"),
    AttributeName::of("default"),
    AttributeName::of("descent"),
    AttributeName::of("kerning"),
    AttributeName::of("hanging"),
    AttributeName::of("headers"),
    AttributeName::of("onpaste"),
    AttributeName::of("onclick"),
    AttributeName::of("optimum"),
    AttributeName::of("onbegin"),
    AttributeName::of("onkeyup"),
    AttributeName::of("onfocus"),
    AttributeName::of("onerror"),
    AttributeName::of("oninput"),
    AttributeName::of("onabort"),
    AttributeName::of("onstart"),
    AttributeName::of("onreset"),
    AttributeName::of("opacity"),
    AttributeName::of("noshade"),
    AttributeName::of("minsize"),
    AttributeName::of("maxsize"),
    AttributeName::of("largeop"),
    AttributeName::of("unicode"),
    AttributeName::svg_camel("targetx", "targetX"),
    AttributeName::svg_camel("targety", "targetY"),
    AttributeName::svg_camel("viewbox", "viewBox"),
    AttributeName::of("version"),
    AttributeName::of("pattern"),
    AttributeName::of("profile"),
    AttributeName::of("spacing"),
    AttributeName::of("restart"),
    AttributeName::of("rowspan"),
    AttributeName::of("sandbox"),
    AttributeName::of("summary"),
    AttributeName::of("standby"),
    AttributeName::of("replace"),
    AttributeName::of("additive"),
    AttributeName::svg_camel("calcmode", "calcMode"),
    AttributeName::of("codetype"),
    AttributeName::of("codebase"),
    AttributeName::of("bevelled"),
    AttributeName::of("baseline"),
    AttributeName::of("exponent"),
    AttributeName::svg_camel("edgemode", "edgeMode"),
    AttributeName::of("encoding"),
    AttributeName::svg_camel("glyphref", "glyphRef"),
    AttributeName::of("datetime"),
    AttributeName::of("disabled"),
    AttributeName::of("fontsize"),
    AttributeName::svg_camel("keytimes", "keyTimes"),
    AttributeName::of("loopend "),
    AttributeName::of("panose-1"),
    AttributeName::of("hreflang"),
    AttributeName::of("onresize"),
    AttributeName::of("onchange"),
    AttributeName::of("onbounce"),
    AttributeName::of("onunload"),
    AttributeName::of("onfinish"),
    AttributeName::of("onscroll"),
    AttributeName::of("operator"),
    AttributeName::of("overflow"),
    AttributeName::of("onsubmit"),
    AttributeName::of("onrepeat"),
    AttributeName::of("onselect"),
    AttributeName::of("notation"),
    AttributeName::of("noresize"),
    AttributeName::of("manifest"),
    AttributeName::of("mathsize"),
    AttributeName::of("multiple"),
    AttributeName::of("longdesc"),
    AttributeName::of("language"),
    AttributeName::of("template"),
    AttributeName::of("tabindex"),
    AttributeName::of("readonly"),
    AttributeName::of("selected"),
    AttributeName::of("rowlines"),
    AttributeName::of("seamless"),
    AttributeName::of("rowalign"),
    AttributeName::of("stretchy"),
    AttributeName::of("required"),
    AttributeName::adjusted(XML_NAMESPACE, "xml", "xml:base", "base"),
    AttributeName::adjusted(XML_NAMESPACE, "xml", "xml:lang", "lang"),
    AttributeName::of("x-height"),
    AttributeName::of("controls "),
    AttributeName::of("aria-owns"),
    AttributeName::of("autofocus"),
    AttributeName::of("aria-sort"),
    AttributeName::of("accesskey"),
    AttributeName::of("amplitude"),
    AttributeName::of("aria-live"),
    AttributeName::of("clip-rule"),
    AttributeName::of("clip-path"),
    AttributeName::of("equalrows"),
    AttributeName::of("elevation"),
    AttributeName::of("direction"),
    AttributeName::of("draggable"),
    AttributeName::svg_camel("filterres", "filterRes"),
    AttributeName::of("fill-rule"),
    AttributeName::of("fontstyle"),
    AttributeName::of("font-size"),
    AttributeName::svg_camel("keypoints", "keyPoints"),
    AttributeName::of("hidefocus"),
    AttributeName::of("onmessage"),
    AttributeName::of("intercept"),
    AttributeName::of("ondragend"),
    AttributeName::of("onmoveend"),
    AttributeName::of("oninvalid"),
    AttributeName::of("onkeydown"),
    AttributeName::of("onfocusin"),
    AttributeName::of("onmouseup"),
    AttributeName::of("inputmode"),
    AttributeName::of("onrowexit"),
    AttributeName::of("mathcolor"),
    AttributeName::svg_camel("maskunits", "maskUnits"),
    AttributeName::of("maxlength"),
    AttributeName::of("linebreak"),
    AttributeName::of("transform"),
    AttributeName::of("v-hanging"),
    AttributeName::of("valuetype"),
    AttributeName::svg_camel("pointsatz", "pointsAtZ"),
    AttributeName::svg_camel("pointsatx", "pointsAtX"),
    AttributeName::svg_camel("pointsaty", "pointsAtY"),
    AttributeName::of("symmetric"),
    AttributeName::of("scrolling"),
    AttributeName::svg_camel("repeatdur", "repeatDur"),
    AttributeName::of("selection"),
    AttributeName::of("separator"),
    AttributeName::of("autoplay  "),
    AttributeName::adjusted(XML_NAMESPACE, "xml", "xml:space", "space"),
    AttributeName::of("aria-grab "),
    AttributeName::of("aria-busy "),
    AttributeName::of("autosubmit"),
    AttributeName::of("alphabetic"),
    AttributeName::of("actiontype"),
    AttributeName::of("accumulate"),
    AttributeName::of("aria-level"),
    AttributeName::of("columnspan"),
    AttributeName::of("cap-height"),
    AttributeName::of("background"),
    AttributeName::of("glyph-name"),
    AttributeName::of("groupalign"),
    AttributeName::of("fontfamily"),
    AttributeName::of("fontweight"),
    AttributeName::of("font-style"),
    AttributeName::svg_camel("keysplines", "keySplines"),
    AttributeName::of("loopstart "),
    AttributeName::of("playcount "),
    AttributeName::of("http-equiv"),
    AttributeName::of("onactivate"),
    AttributeName::of("occurrence"),
    AttributeName::of("irrelevant"),
    AttributeName::of("ondblclick"),
    AttributeName::of("ondragdrop"),
    AttributeName::of("onkeypress"),
    AttributeName::of("onrowenter"),
    AttributeName::of("ondragover"),
    AttributeName::of("onfocusout"),
    AttributeName::of("onmouseout"),
    AttributeName::svg_camel("numoctaves", "numOctaves"),
    AttributeName::of("marker-mid"),
    AttributeName::of("marker-end"),
    AttributeName::svg_camel("textlength", "textLength"),
    AttributeName::of("visibility"),
    AttributeName::svg_camel("viewtarget", "viewTarget"),
    AttributeName::of("vert-adv-y"),
    AttributeName::svg_camel("pathlength", "pathLength"),
    AttributeName::of("repeat-max"),
    AttributeName::of("radiogroup"),
    AttributeName::of("stop-color"),
    AttributeName::of("separators"),
    AttributeName::of("repeat-min"),
    AttributeName::of("rowspacing"),
    AttributeName::svg_camel("zoomandpan", "zoomAndPan"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:type", "type"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:role", "role"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:href", "href"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:show", "show"),
    AttributeName::of("accentunder"),
    AttributeName::of("aria-secret"),
    AttributeName::of("aria-atomic"),
    AttributeName::of("aria-flowto"),
    AttributeName::of("arabic-form"),
    AttributeName::of("cellpadding"),
    AttributeName::of("cellspacing"),
    AttributeName::of("columnwidth"),
    AttributeName::of("columnalign"),
    AttributeName::of("columnlines"),
    AttributeName::of("contextmenu"),
    AttributeName::svg_camel("baseprofile", "baseProfile"),
    AttributeName::of("font-family"),
    AttributeName::of("frameborder"),
    AttributeName::svg_camel("filterunits", "filterUnits"),
    AttributeName::of("flood-color"),
    AttributeName::of("font-weight"),
    AttributeName::of("horiz-adv-x"),
    AttributeName::of("ondragleave"),
    AttributeName::of("onmousemove"),
    AttributeName::of("orientation"),
    AttributeName::of("onmousedown"),
    AttributeName::of("onmouseover"),
    AttributeName::of("ondragenter"),
    AttributeName::of("ideographic"),
    AttributeName::of("onbeforecut"),
    AttributeName::of("onforminput"),
    AttributeName::of("ondragstart"),
    AttributeName::of("onmovestart"),
    AttributeName::svg_camel("markerunits", "markerUnits"),
    AttributeName::of("mathvariant"),
    AttributeName::of("marginwidth"),
    AttributeName::svg_camel("markerwidth", "markerWidth"),
    AttributeName::of("text-anchor"),
    AttributeName::svg_camel("tablevalues", "tableValues"),
    AttributeName::of("scriptlevel"),
    AttributeName::svg_camel("repeatcount", "repeatCount"),
    AttributeName::svg_camel("stitchtiles", "stitchTiles"),
    AttributeName::svg_camel("startoffset", "startOffset"),
    AttributeName::of("scrolldelay"),
    AttributeName::xmlns_prefixed("xmlns:xlink", "xlink"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:title", "title"),
    AttributeName::of("aria-hidden "),
    AttributeName::of("autocomplete"),
    AttributeName::of("aria-setsize"),
    AttributeName::of("aria-channel"),
    AttributeName::of("equalcolumns"),
    AttributeName::of("displaystyle"),
    AttributeName::of("dataformatas"),
    AttributeName::of("fill-opacity"),
    AttributeName::of("font-variant"),
    AttributeName::of("font-stretch"),
    AttributeName::of("framespacing"),
    AttributeName::svg_camel("kernelmatrix", "kernelMatrix"),
    AttributeName::of("ondeactivate"),
    AttributeName::of("onrowsdelete"),
    AttributeName::of("onmouseleave"),
    AttributeName::of("onformchange"),
    AttributeName::of("oncellchange"),
    AttributeName::of("onmousewheel"),
    AttributeName::of("onmouseenter"),
    AttributeName::of("onafterprint"),
    AttributeName::of("onbeforecopy"),
    AttributeName::of("marginheight"),
    AttributeName::svg_camel("markerheight", "markerHeight"),
    AttributeName::of("marker-start"),
    AttributeName::of("mathematical"),
    AttributeName::svg_camel("lengthadjust", "lengthAdjust"),
    AttributeName::of("unselectable"),
    AttributeName::of("unicode-bidi"),
    AttributeName::of("units-per-em"),
    AttributeName::of("word-spacing"),
    AttributeName::of("writing-mode"),
    AttributeName::of("v-alphabetic"),
    AttributeName::svg_camel("patternunits", "patternUnits"),
    AttributeName::svg_camel("spreadmethod", "spreadMethod"),
    AttributeName::svg_camel("surfacescale", "surfaceScale"),
    AttributeName::of("stroke-width"),
    AttributeName::of("repeat-start"),
    AttributeName::svg_camel("stddeviation", "stdDeviation"),
    AttributeName::of("stop-opacity"),
    AttributeName::of("aria-checked "),
    AttributeName::of("aria-pressed "),
    AttributeName::of("aria-invalid "),
    AttributeName::of("aria-controls"),
    AttributeName::of("aria-haspopup"),
    AttributeName::of("accent-height"),
    AttributeName::of("aria-valuenow"),
    AttributeName::of("aria-relevant"),
    AttributeName::of("aria-posinset"),
    AttributeName::of("aria-valuemax"),
    AttributeName::of("aria-readonly"),
    AttributeName::of("aria-required"),
    AttributeName::svg_camel("attributetype", "attributeType"),
    AttributeName::svg_camel("attributename", "attributeName"),
    AttributeName::of("aria-datatype"),
    AttributeName::of("aria-valuemin"),
    AttributeName::svg_camel("basefrequency", "baseFrequency"),
    AttributeName::of("columnspacing"),
    AttributeName::of("color-profile"),
    AttributeName::svg_camel("clippathunits", "clipPathUnits"),
    AttributeName::of("definitionurl"),
    AttributeName::svg_camel("gradientunits", "gradientUnits"),
    AttributeName::of("flood-opacity"),
    AttributeName::of("onafterupdate"),
    AttributeName::of("onerrorupdate"),
    AttributeName::of("onbeforepaste"),
    AttributeName::of("onlosecapture"),
    AttributeName::of("oncontextmenu"),
    AttributeName::of("onselectstart"),
    AttributeName::of("onbeforeprint"),
    AttributeName::of("movablelimits"),
    AttributeName::of("linethickness"),
    AttributeName::of("unicode-range"),
    AttributeName::of("thinmathspace"),
    AttributeName::of("vert-origin-x"),
    AttributeName::of("vert-origin-y"),
    AttributeName::of("v-ideographic"),
    AttributeName::svg_camel("preservealpha", "preserveAlpha"),
    AttributeName::of("scriptminsize"),
    AttributeName::of("specification"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:actuate", "actuate"),
    AttributeName::adjusted(XLINK_NAMESPACE, "xlink", "xlink:arcrole", "arcrole"),
    AttributeName::of("aria-expanded "),
    AttributeName::of("aria-disabled "),
    AttributeName::of("aria-selected "),
    AttributeName::of("accept-charset"),
    AttributeName::of("alignmentscope"),
    AttributeName::of("aria-multiline"),
    AttributeName::of("baseline-shift"),
    AttributeName::of("horiz-origin-x"),
    AttributeName::of("horiz-origin-y"),
    AttributeName::of("onbeforeupdate"),
    AttributeName::of("onfilterchange"),
    AttributeName::of("onrowsinserted"),
    AttributeName::of("onbeforeunload"),
    AttributeName::of("mathbackground"),
    AttributeName::of("letter-spacing"),
    AttributeName::of("lighting-color"),
    AttributeName::of("thickmathspace"),
    AttributeName::of("text-rendering"),
    AttributeName::of("v-mathematical"),
    AttributeName::of("pointer-events"),
    AttributeName::svg_camel("primitiveunits", "primitiveUnits"),
    AttributeName::svg_camel("systemlanguage", "systemLanguage"),
    AttributeName::of("stroke-linecap"),
    AttributeName::of("subscriptshift"),
    AttributeName::of("stroke-opacity"),
    AttributeName::of("aria-dropeffect"),
    AttributeName::of("aria-labelledby"),
    AttributeName::of("aria-templateid"),
    AttributeName::of("color-rendering"),
    AttributeName::of("contenteditable"),
    AttributeName::svg_camel("diffuseconstant", "diffuseConstant"),
    AttributeName::of("ondataavailable"),
    AttributeName::of("oncontrolselect"),
    AttributeName::of("image-rendering"),
    AttributeName::of("mediummathspace"),
    AttributeName::of("text-decoration"),
    AttributeName::of("shape-rendering"),
    AttributeName::of("stroke-linejoin"),
    AttributeName::of("repeat-template"),
    AttributeName::of("aria-describedby"),
    AttributeName::svg_camel("contentstyletype", "contentStyleType"),
    AttributeName::of("font-size-adjust"),
    AttributeName::svg_camel("kernelunitlength", "kernelUnitLength"),
    AttributeName::of("onbeforeactivate"),
    AttributeName::of("onpropertychange"),
    AttributeName::of("ondatasetchanged"),
    AttributeName::svg_camel("maskcontentunits", "maskContentUnits"),
    AttributeName::svg_camel("patterntransform", "patternTransform"),
    AttributeName::svg_camel("requiredfeatures", "requiredFeatures"),
    AttributeName::of("rendering-intent"),
    AttributeName::svg_camel("specularexponent", "specularExponent"),
    AttributeName::svg_camel("specularconstant", "specularConstant"),
    AttributeName::of("superscriptshift"),
    AttributeName::of("stroke-dasharray"),
    AttributeName::svg_camel("xchannelselector", "xChannelSelector"),
    AttributeName::svg_camel("ychannelselector", "yChannelSelector"),
    AttributeName::of("aria-autocomplete"),
    AttributeName::svg_camel("contentscripttype", "contentScriptType"),
    AttributeName::of("enable-background"),
    AttributeName::of("dominant-baseline"),
    AttributeName::svg_camel("gradienttransform", "gradientTransform"),
    AttributeName::of("onbefordeactivate"),
    AttributeName::of("ondatasetcomplete"),
    AttributeName::of("overline-position"),
    AttributeName::of("onbeforeeditfocus"),
    AttributeName::svg_camel("limitingconeangle", "limitingConeAngle"),
    AttributeName::of("verythinmathspace"),
    AttributeName::of("stroke-dashoffset"),
    AttributeName::of("stroke-miterlimit"),
    AttributeName::of("alignment-baseline"),
    AttributeName::of("onreadystatechange"),
    AttributeName::of("overline-thickness"),
    AttributeName::of("underline-position"),
    AttributeName::of("verythickmathspace"),
    AttributeName::svg_camel("requiredextensions", "requiredExtensions"),
    AttributeName::of("color-interpolation"),
    AttributeName::of("underline-thickness"),
    AttributeName::svg_camel("preserveaspectratio", "preserveAspectRatio"),
    AttributeName::svg_camel("patterncontentunits", "patternContentUnits"),
    AttributeName::of("aria-multiselectable"),
    AttributeName::of("scriptsizemultiplier"),
    AttributeName::of("aria-activedescendant"),
    AttributeName::of("veryverythinmathspace"),
    AttributeName::of("veryverythickmathspace"),
    AttributeName::of("strikethrough-position"),
    AttributeName::of("strikethrough-thickness"),
    AttributeName::svg_camel("externalresourcesrequired", "externalResourcesRequired"),
    AttributeName::of("glyph-orientation-vertical"),
    AttributeName::of("color-interpolation-filters"),
    AttributeName::of("glyph-orientation-horizontal"),
];
